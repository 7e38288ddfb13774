//! Final summary printing.
//!
//! Runners report progress through the [`Reporter`]; this module prints the one
//! line (or table) that tells the user what the command ended up doing.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandSummary, ExtractSummary, InstallSummary, RemoveSummary, StatsSummary,
};
use crate::reporter::{Reporter, SUCCESS_MARK};

pub fn print(summary: &CommandSummary, reporter: &Reporter) {
    match summary {
        CommandSummary::Extract(s) => print_extract(s, reporter),
        CommandSummary::Install(s) => print_install(s, reporter),
        CommandSummary::Remove(s) => print_remove(s, reporter),
        CommandSummary::Stats(s) => print_stats(s, reporter, &mut io::stdout().lock()),
    }
}

fn print_extract(summary: &ExtractSummary, reporter: &Reporter) {
    if let Some(json) = &summary.extraction.json {
        reporter.detail(format!(
            "{} settings-schema.json, {} metadata.json: {} new entries, {} new locations",
            json.schema_files, json.metadata_files, json.entries_created, json.locations_added
        ));
    }
    if summary.custom_header {
        reporter.detail("Header rewritten from metadata.json");
    }
    if summary.extraction.template_written {
        reporter.success(format!("Template written to {}", summary.output.display()));
    } else {
        reporter.info(format!(
            "{} No translatable strings found for {}",
            SUCCESS_MARK.green(),
            summary.uuid
        ));
    }
}

fn print_install(summary: &InstallSummary, reporter: &Reporter) {
    if summary.installed == 0 {
        reporter.info("Nothing to install.");
        return;
    }
    reporter.success(format!(
        "Installed {} {}.",
        summary.installed,
        plural(summary.installed, "file", "files")
    ));
    reporter.detail(format!(
        "{} -> {}",
        summary.uuid,
        summary.locale_dir.display()
    ));
}

fn print_remove(summary: &RemoveSummary, reporter: &Reporter) {
    if summary.removed == 0 {
        reporter.info("Nothing to remove.");
        return;
    }
    reporter.success(format!(
        "Removed {} {}.",
        summary.removed,
        plural(summary.removed, "file", "files")
    ));
    reporter.detail(format!(
        "{} <- {}",
        summary.uuid,
        summary.locale_dir.display()
    ));
}

fn print_stats<W: Write>(summary: &StatsSummary, reporter: &Reporter, writer: &mut W) {
    let Some(report) = &summary.report else {
        return;
    };
    if summary.print_table {
        let _ = write!(writer, "{}", report.to_table());
    }
    if let Some(path) = &summary.report_path {
        reporter.detail(format!("Report saved to {}", path.display()));
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
