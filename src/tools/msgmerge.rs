use std::{path::Path, process::Command};

use anyhow::Result;

pub const MSGMERGE: &str = "msgmerge";
pub const MSGGREP: &str = "msggrep";

/// Bring `po_file` up to date with `template` in place.
///
/// Runs silently without wrapping, fuzzy matching or backups, so the copy only
/// gains the template's new and changed entries.
pub fn update(po_file: &Path, template: &Path) -> Result<()> {
    super::run(
        Command::new(MSGMERGE)
            .args([
                "--silent",
                "--no-wrap",
                "--no-fuzzy-matching",
                "--backup=off",
                "--update",
            ])
            .arg(po_file)
            .arg(template),
    )?;
    Ok(())
}

/// Messages of `po_file` whose translation is empty, as printed by `msggrep`.
pub fn untranslated_messages(po_file: &Path) -> Result<String> {
    let output = super::run(
        Command::new(MSGGREP)
            .args(["-v", "-T", "-e", "."])
            .arg(po_file),
    )?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Number of untranslated entries in `msggrep` output.
///
/// `msggrep` always prints the header entry, which has its own `msgstr`
/// line, so one is subtracted from a non-zero count.
pub fn count_untranslated(msggrep_output: &str) -> usize {
    msggrep_output
        .lines()
        .filter(|line| line.starts_with("msgstr"))
        .count()
        .saturating_sub(1)
}
