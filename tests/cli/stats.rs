use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, tool_available};

fn completeness_tools_available() -> bool {
    tool_available("msgmerge") && tool_available("msggrep")
}

fn po_file(entries: &[(&str, &str)]) -> String {
    let mut content =
        "msgid \"\"\nmsgstr \"\"\n\"Content-Type: text/plain; charset=UTF-8\\n\"\n\n".to_string();
    for (id, text) in entries {
        content.push_str(&format!("msgid \"{}\"\nmsgstr \"{}\"\n\n", id, text));
    }
    content
}

#[test]
fn test_stats_without_localized_files() -> Result<()> {
    if !completeness_tools_available() {
        return Ok(());
    }
    let test = CliTest::named("no-po@xlet-makepot")?;

    let output = test.stats_command().output()?;

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No localized files found"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_stats_counts_untranslated_strings() -> Result<()> {
    if !completeness_tools_available() {
        return Ok(());
    }
    let test = CliTest::named("counts@xlet-makepot")?;
    let template = po_file(&[("One", ""), ("Two", ""), ("Three", ""), ("Four", "")]);
    test.write_file(&format!("po/{}.pot", test.uuid()), &template)?;
    test.write_file("po/de.po", &po_file(&[("One", "Eins"), ("Two", "Zwei")]))?;
    test.write_file(
        "po/es.po",
        &po_file(&[("One", "Uno"), ("Two", "Dos"), ("Three", "Tres"), ("Four", "Cuatro")]),
    )?;
    let de_before = std::fs::read_to_string(test.root().join("po/de.po"))?;

    let output = test.stats_command().output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows: Vec<Vec<&str>> = stdout
        .lines()
        .skip(3)
        .map(|line| line.split_whitespace().collect())
        .collect();
    assert_eq!(rows, vec![vec!["de.po", "2"], vec!["es.po", "0"]]);

    let de_after = std::fs::read_to_string(test.root().join("po/de.po"))?;
    assert_eq!(de_before, de_after);

    Ok(())
}

#[test]
fn test_stats_requires_template() -> Result<()> {
    if !completeness_tools_available() {
        return Ok(());
    }
    let test = CliTest::named("no-template@xlet-makepot")?;
    test.write_file("po/de.po", &po_file(&[("One", "Eins")]))?;

    let output = test.stats_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Template not found"));

    Ok(())
}
