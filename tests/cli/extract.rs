use std::process::Command;

use anyhow::Result;
use pretty_assertions::assert_eq;
use xlet_makepot::engine::Template;

use crate::{CliTest, tool_available};

const SCHEMA: &str = r#"{
    "head": {
        "type": "header",
        "description": "General"
    },
    "setting1": {
        "type": "combobox",
        "description": "Pick one",
        "tooltip": "Choose wisely",
        "options": {"a": "Alpha", "b": "custom"}
    },
    "list": {
        "type": "list",
        "columns": [
            {"id": "name", "title": "Name"},
            {"id": "size", "title": "Size", "units": "px"}
        ]
    }
}"#;

const METADATA: &str = r#"{
    "uuid": "demo@xlet-makepot",
    "name": "Demo",
    "description": "A demo applet",
    "version": "1.4",
    "contributors": "Alice, Bob"
}"#;

fn loc(parts: &[&str]) -> String {
    parts.join("->")
}

#[test]
fn test_extract_schema_and_metadata_strings() -> Result<()> {
    let test = CliTest::with_file("settings-schema.json", SCHEMA)?;
    test.write_file("metadata.json", METADATA)?;

    let output = test.extract_json_command().output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let template = Template::load(&test.pot_path())?;
    let texts: Vec<String> = template.entries().into_iter().map(|e| e.text).collect();
    assert_eq!(
        texts,
        vec![
            "Demo",
            "A demo applet",
            "Alice",
            "Bob",
            "General",
            "Pick one",
            "Choose wisely",
            "Alpha",
            "Name",
            "Size",
            "px",
        ]
    );
    assert!(!template.contains("custom"));
    assert_eq!(
        template.locations("Alpha"),
        Some(vec![loc(&["settings-schema.json", "setting1", "options"])])
    );
    assert_eq!(
        template.locations("px"),
        Some(vec![loc(&["settings-schema.json", "list", "columns", "units"])])
    );
    assert_eq!(
        template.locations("Bob"),
        Some(vec![loc(&["metadata.json", "contributors"])])
    );

    Ok(())
}

#[test]
fn test_extract_merges_locations_of_repeated_strings() -> Result<()> {
    let test = CliTest::with_file(
        "settings-schema.json",
        r#"{"enable": {"type": "switch", "description": "Enable feature"}}"#,
    )?;
    test.write_file(
        "extra/settings-schema.json",
        r#"{"other": {"type": "switch", "description": "Enable feature"}}"#,
    )?;

    let output = test.extract_json_command().output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let template = Template::load(&test.pot_path())?;
    assert_eq!(template.len(), 1);
    assert_eq!(
        template.locations("Enable feature"),
        Some(vec![
            loc(&["settings-schema.json", "enable", "description"]),
            loc(&["extra", "settings-schema.json", "other", "description"]),
        ])
    );

    Ok(())
}

#[test]
fn test_extract_skips_keys_from_arguments_and_settings_file() -> Result<()> {
    let test = CliTest::with_file(
        "settings-schema.json",
        r#"{
            "visible": {"type": "entry", "description": "Shown"},
            "from-cli": {"type": "entry", "description": "Hidden by flag"},
            "from-file": {"type": "entry", "description": "Hidden by file"}
        }"#,
    )?;
    test.write_file(
        &format!("po/{}.json", test.uuid()),
        r#"{"SKIP_KEYS": ["from-file"]}"#,
    )?;

    let output = test
        .extract_json_command()
        .args(["-s", "from-cli"])
        .output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let template = Template::load(&test.pot_path())?;
    assert!(template.contains("Shown"));
    assert!(!template.contains("Hidden by flag"));
    assert!(!template.contains("Hidden by file"));

    Ok(())
}

#[test]
fn test_extract_regenerates_from_scratch() -> Result<()> {
    let test = CliTest::with_file(
        "settings-schema.json",
        r#"{"old": {"type": "entry", "description": "Old text"}}"#,
    )?;
    assert!(test.extract_json_command().output()?.status.success());

    test.write_file(
        "settings-schema.json",
        r#"{"new": {"type": "entry", "description": "New text"}}"#,
    )?;
    assert!(test.extract_json_command().output()?.status.success());

    let template = Template::load(&test.pot_path())?;
    assert!(template.contains("New text"));
    assert!(!template.contains("Old text"));

    Ok(())
}

#[test]
fn test_extract_to_custom_output() -> Result<()> {
    let test = CliTest::with_file("metadata.json", METADATA)?;
    let output_path = test.outside().join("custom.pot");

    let output = test
        .extract_json_command()
        .arg("-o")
        .arg(&output_path)
        .output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    assert!(!test.pot_path().exists());
    let template = Template::load(&output_path)?;
    assert!(template.contains("Demo"));

    Ok(())
}

#[test]
fn test_extract_with_custom_header() -> Result<()> {
    let test = CliTest::with_file("metadata.json", METADATA)?;
    test.write_file(
        &format!("po/{}.json", test.uuid()),
        r#"{"FIRST_AUTHOR": "Jane Doe", "FIRST_AUTHOR_EMAIL": "<jane@example.com>"}"#,
    )?;

    let output = test.extract_json_command().arg("-c").output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let content = std::fs::read_to_string(test.pot_path())?;
    assert!(content.starts_with(
        "# This is a template file for translating the demo@xlet-makepot package.\n"
    ));
    assert!(content.contains("# Jane Doe <jane@example.com>, "));
    assert!(content.contains("\"Project-Id-Version: demo@xlet-makepot 1.4\\n\"\n"));
    assert!(content.contains("msgid \"A demo applet\""));
    assert_eq!(content.matches("msgid \"\"\n").count(), 1);

    if tool_available("msgfmt") {
        let check = Command::new("msgfmt")
            .arg("--check")
            .arg("-o")
            .arg(test.root().join("po").join("check.mo"))
            .arg(test.pot_path())
            .output()?;
        assert!(check.status.success(), "{}", String::from_utf8_lossy(&check.stderr));
    }

    Ok(())
}

#[test]
fn test_extract_custom_header_requires_metadata() -> Result<()> {
    let test = CliTest::with_file(
        "settings-schema.json",
        r#"{"a": {"type": "entry", "description": "Text"}}"#,
    )?;

    let output = test.extract_json_command().arg("-c").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to get metadata"));

    Ok(())
}

#[test]
fn test_extract_rejects_malformed_json() -> Result<()> {
    let test = CliTest::with_file("settings-schema.json", "{ \"broken\": ")?;

    let output = test.extract_json_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("settings-schema.json"));

    Ok(())
}

#[test]
fn test_extract_missing_xlet_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .extract_json_command()
        .args(["-x", "missing@xlet"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist."));

    Ok(())
}

#[test]
fn test_extract_source_files_with_xgettext() -> Result<()> {
    if !tool_available("xgettext") {
        return Ok(());
    }
    let test = CliTest::with_file(
        "applet.js",
        "const label = _(\"Hello from JavaScript\");\nconst other = N_(\"Marked only\");\n",
    )?;
    test.write_file("lib/test/fixture.js", "_(\"Ignored string\");\n")?;
    test.write_file("helper.py", "print(_(\"Hello from Python\"))\n")?;
    test.write_file(
        "settings-schema.json",
        r#"{"greeting": {"type": "entry", "description": "Hello from JavaScript"}}"#,
    )?;

    let output = test
        .command()
        .args(["extract", "-k", "_", "N_", "-g", "*test*"])
        .output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let template = Template::load(&test.pot_path())?;
    assert!(template.contains("Hello from JavaScript"));
    assert!(template.contains("Marked only"));
    assert!(template.contains("Hello from Python"));
    assert!(!template.contains("Ignored string"));
    let locations = template.locations("Hello from JavaScript").unwrap_or_default();
    assert!(
        locations
            .iter()
            .any(|l| l == &loc(&["settings-schema.json", "greeting", "description"])),
        "{:?}",
        locations
    );

    Ok(())
}
