//! Custom template header.
//!
//! The header block is everything from the top of the template up to its first
//! empty line. Rewriting replaces that block and leaves the body untouched.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    config::PotSettings,
    engine::{json_scan::METADATA_FILE, template::split_header},
    reporter::Reporter,
};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute][offset_hour sign:mandatory][offset_minute]"
);

pub const DEFAULT_AUTHOR: &str = "FIRST_AUTHOR";
pub const DEFAULT_AUTHOR_EMAIL: &str = "<EMAIL@ADDRESS>";
pub const DEFAULT_VERSION: &str = "VERSION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields {
    pub package: String,
    pub version: String,
    pub timestamp: String,
    pub first_author: String,
    pub first_author_email: String,
    /// Either empty or `"<year>-"`, ready to be placed before the current year.
    pub copy_initial_year: String,
    pub copy_current_year: String,
}

impl HeaderFields {
    pub fn new(
        package: &str,
        version: &str,
        now: OffsetDateTime,
        settings: Option<&PotSettings>,
    ) -> Result<Self> {
        let current_year = now.year().to_string();
        let settings = settings.cloned().unwrap_or_default();

        let copy_initial_year = match settings.copy_initial_year.as_deref() {
            Some(year) if !year.is_empty() && year != current_year => format!("{}-", year),
            _ => String::new(),
        };

        Ok(Self {
            package: package.to_string(),
            version: version.to_string(),
            timestamp: format_timestamp(now)?,
            first_author: settings
                .first_author
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            first_author_email: settings
                .first_author_email
                .unwrap_or_else(|| DEFAULT_AUTHOR_EMAIL.to_string()),
            copy_initial_year,
            copy_current_year: current_year,
        })
    }

    pub fn render(&self) -> String {
        let years = format!("{}{}", self.copy_initial_year, self.copy_current_year);
        format!(
            r#"# This is a template file for translating the {package} package.
# Copyright (C) {years}
# This file is distributed under the same license as the {package} package.
# {author} {email}, {years}.
#
msgid ""
msgstr ""
"Project-Id-Version: {package} {version}\n"
"POT-Creation-Date: {timestamp}\n"
"PO-Revision-Date: YEAR-MO-DA HO:MI+ZONE\n"
"Last-Translator: FULL NAME <EMAIL@ADDRESS>\n"
"Language-Team: LANGUAGE <LL@li.org>\n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"
"Generated-By: xlet-makepot {script_version}\n"
"#,
            package = self.package,
            version = self.version,
            timestamp = self.timestamp,
            author = self.first_author,
            email = self.first_author_email,
            years = years,
            script_version = env!("CARGO_PKG_VERSION"),
        )
    }
}

/// Current local time, or UTC when the local offset cannot be determined.
pub fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Timestamp in the `xgettext` style, e.g. `2024-03-09 17:05-0300`.
pub fn format_timestamp(now: OffsetDateTime) -> Result<String> {
    now.format(TIMESTAMP_FORMAT)
        .context("Failed to format timestamp")
}

/// Replace the header block of `content` with `header`, keeping the entries.
///
/// The header block is the `msgid ""` entry with the comments above it, ending
/// at the first blank line that follows it.
pub fn replace_header(content: &str, header: &str) -> Result<String> {
    let (Some(_), body) = split_header(content) else {
        bail!("Template has no header entry");
    };
    Ok(format!("{}{}", header, body))
}

/// Version string from the xlet metadata, accepting strings and numbers.
pub fn metadata_version(metadata: &Value) -> String {
    match metadata.get("version") {
        Some(Value::String(v)) => v.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => DEFAULT_VERSION.to_string(),
    }
}

/// Rewrite the header of the template at `pot_path` using project metadata.
pub fn rewrite_header(
    project_root: &Path,
    uuid: &str,
    pot_path: &Path,
    settings: Option<&PotSettings>,
    reporter: &Reporter,
) -> Result<()> {
    reporter.step("Customizing POT header...");

    let metadata_path = project_root.join(METADATA_FILE);
    let metadata: Value = fs::read_to_string(&metadata_path)
        .map_err(anyhow::Error::from)
        .and_then(|raw| serde_json::from_str(&raw).map_err(anyhow::Error::from))
        .with_context(|| {
            format!(
                "Failed to get metadata - missing, corrupt, or incomplete {}",
                metadata_path.display()
            )
        })?;

    let fields = HeaderFields::new(uuid, &metadata_version(&metadata), now_local(), settings)?;

    let content = fs::read_to_string(pot_path)
        .with_context(|| format!("Failed to read template: {}", pot_path.display()))?;
    let updated = replace_header(&content, &fields.render())
        .with_context(|| format!("Failed to set custom header: {}", pot_path.display()))?;
    fs::write(pot_path, updated)
        .with_context(|| format!("Failed to write template: {}", pot_path.display()))?;

    reporter.success("POT header customization complete.");
    Ok(())
}
