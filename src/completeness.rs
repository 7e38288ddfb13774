//! Translation completeness report.
//!
//! Each localized file of a project is copied to a scratch directory, updated
//! from the current template, and its untranslated entries are counted.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use unicode_width::UnicodeWidthStr;

use crate::{
    engine::sources::sorted_walk,
    reporter::Reporter,
    tools::{self, msgmerge},
};

pub const SCRATCH_DIR_NAME: &str = "xlet-makepot-tmp";
pub const REPORT_FILE_NAME: &str = "po_files_untranslated_table.md";
pub const LOCALIZED_EXTENSION: &str = "po";

const LANGUAGE_HEADING: &str = "LANGUAGE";
const UNTRANSLATED_HEADING: &str = "UNTRANSLATED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletenessRecord {
    pub file_name: String,
    pub untranslated: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletenessReport {
    pub project_id: String,
    pub records: Vec<CompletenessRecord>,
}

impl CompletenessReport {
    pub fn to_markdown(&self) -> String {
        let mut lines = vec![
            format!("### {}", self.project_id),
            String::new(),
            format!("|{}|{}|", LANGUAGE_HEADING, UNTRANSLATED_HEADING),
            "|--------|------------|".to_string(),
        ];
        lines.extend(
            self.records
                .iter()
                .map(|r| format!("|{}|{}|", r.file_name, r.untranslated)),
        );
        lines.join("\n")
    }

    /// Column-aligned rendering for the terminal.
    pub fn to_table(&self) -> String {
        let name_width = self
            .records
            .iter()
            .map(|r| UnicodeWidthStr::width(r.file_name.as_str()))
            .chain(std::iter::once(LANGUAGE_HEADING.len()))
            .max()
            .unwrap_or(0);

        let mut out = format!("{}\n\n", self.project_id);
        out.push_str(&format!(
            "{}  {}\n",
            pad(LANGUAGE_HEADING, name_width),
            UNTRANSLATED_HEADING
        ));
        for record in &self.records {
            out.push_str(&format!(
                "{}  {:>width$}\n",
                pad(&record.file_name, name_width),
                record.untranslated,
                width = UNTRANSLATED_HEADING.len()
            ));
        }
        out
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

/// Scratch directory for `project_id` under the system temp directory.
pub fn scratch_dir(project_id: &str) -> PathBuf {
    env::temp_dir().join(SCRATCH_DIR_NAME).join(project_id)
}

/// Localized files under `po_dir`, recursively, in sorted walk order.
pub fn localized_files(po_dir: &Path) -> Vec<PathBuf> {
    sorted_walk(po_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some(LOCALIZED_EXTENSION))
        .map(|e| e.into_path())
        .collect()
}

/// Count untranslated entries of every localized file of the project.
///
/// Returns `None` when the project has no localized files. The project's own
/// files are never modified; only scratch copies are updated.
pub fn generate_report(
    project_id: &str,
    project_root: &Path,
    template_path: &Path,
    reporter: &Reporter,
) -> Result<Option<CompletenessReport>> {
    tools::require(msgmerge::MSGMERGE, tools::GETTEXT_HINT)?;
    tools::require(msgmerge::MSGGREP, tools::GETTEXT_HINT)?;

    let scratch = scratch_dir(project_id);
    let _ = fs::remove_dir_all(&scratch);
    let scratch_po = scratch.join("po");
    fs::create_dir_all(&scratch_po)
        .with_context(|| format!("Failed to create directory: {}", scratch_po.display()))?;

    let po_dir = project_root.join("po");
    let files = if po_dir.is_dir() {
        localized_files(&po_dir)
    } else {
        Vec::new()
    };
    if files.is_empty() {
        reporter.info(format!("No localized files found for {}.", project_id));
        return Ok(None);
    }
    if !template_path.is_file() {
        bail!(
            "Template not found: {}. Run the extract command first.",
            template_path.display()
        );
    }

    reporter.step(project_id);
    let mut records = Vec::with_capacity(files.len());
    for file in files {
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let copy = scratch_po.join(&file_name);

        reporter.info(format!("Copying {} to temporary location...", file_name));
        fs::copy(&file, &copy)
            .with_context(|| format!("Failed to copy {}", file.display()))?;

        reporter.info(format!(
            "Updating temporary {} from localization template...",
            file_name
        ));
        msgmerge::update(&copy, template_path)?;

        reporter.info("Counting untranslated strings...");
        let untranslated = msgmerge::count_untranslated(&msgmerge::untranslated_messages(&copy)?);
        records.push(CompletenessRecord {
            file_name,
            untranslated,
        });
    }

    Ok(Some(CompletenessReport {
        project_id: project_id.to_string(),
        records,
    }))
}

/// Write the markdown report into the project's scratch directory.
pub fn write_report(report: &CompletenessReport) -> Result<PathBuf> {
    let dir = scratch_dir(&report.project_id);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    let path = dir.join(REPORT_FILE_NAME);
    fs::write(&path, report.to_markdown())
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(path)
}
