use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

use super::{
    Candidate, MergeOutcome, location,
    merge::merge_entry,
    metadata::extract_metadata_strings,
    schema::extract_schema_strings,
    sources::{sorted_walk, to_relative},
    template::Template,
};
use crate::reporter::Reporter;

pub const SETTINGS_SCHEMA_FILE: &str = "settings-schema.json";
pub const METADATA_FILE: &str = "metadata.json";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JsonScanSummary {
    pub schema_files: usize,
    pub metadata_files: usize,
    pub entries_created: usize,
    pub locations_added: usize,
}

impl JsonScanSummary {
    fn record(&mut self, outcome: MergeOutcome) {
        match outcome {
            MergeOutcome::Created => self.entries_created += 1,
            MergeOutcome::LocationAdded => self.locations_added += 1,
            MergeOutcome::Skipped | MergeOutcome::Unchanged => {}
        }
    }
}

/// Parse a JSON file keeping object keys in source order.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

/// Walk the project tree and merge every string found in settings schemas and
/// metadata files into `template`.
///
/// Any file that fails to parse aborts the scan; the template must then not be saved.
pub fn scan_json_files(
    project_root: &Path,
    template: &mut Template,
    ignored_keys: &HashSet<String>,
    reporter: &Reporter,
) -> Result<JsonScanSummary> {
    let mut summary = JsonScanSummary::default();

    for entry in sorted_walk(project_root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                reporter.warn(format!("Cannot access path: {}", e));
                continue;
            }
        };
        // Symlinked files are not followed.
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        let is_schema = file_name == SETTINGS_SCHEMA_FILE;
        if !is_schema && file_name != METADATA_FILE {
            continue;
        }

        let label = location::path_label(&to_relative(project_root, entry.path()));
        let data = read_json(entry.path())?;
        reporter.detail(format!("Scanning {}", entry.path().display()));

        let candidates: Vec<Candidate> = if is_schema {
            summary.schema_files += 1;
            extract_schema_strings(&data, &label, ignored_keys, reporter)
        } else {
            summary.metadata_files += 1;
            extract_metadata_strings(&data, &label)
        };

        for candidate in candidates {
            summary.record(merge_entry(template, &candidate.text, &candidate.location));
        }
    }

    Ok(summary)
}
