use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, tool_available};

const GERMAN_PO: &str = r#"msgid ""
msgstr ""
"Project-Id-Version: demo@xlet-makepot 1.0\n"
"PO-Revision-Date: 2024-01-01 00:00+0000\n"
"Last-Translator: Jane Doe <jane@example.com>\n"
"Language-Team: German\n"
"Language: de\n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"

msgid "Hello"
msgstr "Hallo"
"#;

#[test]
fn test_install_without_po_dir() -> Result<()> {
    let test = CliTest::new()?;
    let locale_dir = test.outside().join("locale");

    let output = test.locale_command("install", &locale_dir).output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("The 'po' directory seems not to be present."));
    assert!(!locale_dir.exists());

    Ok(())
}

#[test]
fn test_install_then_remove() -> Result<()> {
    if !tool_available("msgfmt") {
        return Ok(());
    }
    let test = CliTest::with_file("po/de.po", GERMAN_PO)?;
    test.write_file("po/fr.po", &GERMAN_PO.replace("Hallo", "Bonjour"))?;
    let locale_dir = test.outside().join("locale");

    let output = test.locale_command("install", &locale_dir).output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let compiled = |lang: &str| {
        locale_dir
            .join(lang)
            .join("LC_MESSAGES")
            .join(format!("{}.mo", test.uuid()))
    };
    assert!(compiled("de").is_file());
    assert!(compiled("fr").is_file());

    let output = test.locale_command("remove", &locale_dir).output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    assert!(!compiled("de").exists());
    assert!(!locale_dir.join("de").exists());
    assert!(!locale_dir.join("fr").exists());

    Ok(())
}

#[test]
fn test_remove_keeps_other_domains() -> Result<()> {
    let test = CliTest::new()?;
    let locale_dir = test.outside().join("locale");
    let messages = locale_dir.join("de").join("LC_MESSAGES");
    fs::create_dir_all(&messages)?;
    fs::write(messages.join(format!("{}.mo", test.uuid())), "")?;
    fs::write(messages.join("other@someone.mo"), "")?;

    let output = test.locale_command("remove", &locale_dir).output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    assert!(!messages.join(format!("{}.mo", test.uuid())).exists());
    assert!(messages.join("other@someone.mo").exists());

    Ok(())
}
