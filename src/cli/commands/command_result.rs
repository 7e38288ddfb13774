use std::path::PathBuf;

use crate::{completeness::CompletenessReport, engine::ExtractionSummary};

/// What a command did, handed to the report printer.
#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Install(InstallSummary),
    Remove(RemoveSummary),
    Stats(StatsSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub uuid: String,
    pub output: PathBuf,
    pub extraction: ExtractionSummary,
    pub custom_header: bool,
}

#[derive(Debug)]
pub struct InstallSummary {
    pub uuid: String,
    pub locale_dir: PathBuf,
    pub installed: usize,
}

#[derive(Debug)]
pub struct RemoveSummary {
    pub uuid: String,
    pub locale_dir: PathBuf,
    pub removed: usize,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub uuid: String,
    /// `None` when the xlet has no localized files.
    pub report: Option<CompletenessReport>,
    pub report_path: Option<PathBuf>,
    /// Print the table instead of handing the report to the viewer.
    pub print_table: bool,
}
