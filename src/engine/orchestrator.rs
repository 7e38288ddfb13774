use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{
    json_scan::{JsonScanSummary, scan_json_files},
    request::{ExtractionRequest, SourceKind},
    sources::collect_source_files,
    template::Template,
};
use crate::{
    reporter::Reporter,
    tools::{self, xgettext::Xgettext},
    utils::{WorkingDirGuard, create_dir_all_public},
};

/// What one extraction run produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Files handed to the external extractor, per kind, in run order.
    pub source_files: Vec<(SourceKind, usize)>,
    pub json: Option<JsonScanSummary>,
    /// Whether a template exists at the output path after the run.
    pub template_written: bool,
}

/// Regenerate the template at `request.output_path` from scratch.
///
/// Steps, in order:
/// 1. delete any existing output, since the external extractor neither prunes
///    obsolete entries nor refreshes moved references;
/// 2. run the external extractor once per enabled source kind, joining onto
///    the output once an earlier kind has produced it;
/// 3. walk the tree for `settings-schema.json` and `metadata.json` files and
///    merge their strings into the template;
/// 4. save in place when step 2 produced a file, otherwise write a new one.
///
/// The process working directory is the project root while this runs.
pub fn extract(request: &ExtractionRequest, reporter: &Reporter) -> Result<ExtractionSummary> {
    if !request.project_root.is_dir() {
        bail!("{} does not exist.", request.project_root.display());
    }

    let output = request.output_path.as_path();
    if output.exists() {
        fs::remove_file(output)
            .with_context(|| format!("Failed to remove old template: {}", output.display()))?;
    }
    if let Some(parent) = output.parent() {
        create_dir_all_public(parent)?;
    }

    let mut summary = ExtractionSummary::default();
    let external_kinds: Vec<SourceKind> = request.external_kinds().collect();
    if !external_kinds.is_empty() {
        tools::require(tools::xgettext::PROGRAM, tools::GETTEXT_HINT)?;
    }

    let _cwd = WorkingDirGuard::enter(&request.project_root)?;

    for kind in external_kinds {
        let Some(language) = kind.xgettext_language() else {
            continue;
        };
        reporter.step(format!("Scanning {} files...", kind.display_name()));

        let files = collect_source_files(request, kind, reporter);
        summary.source_files.push((kind, files.len()));
        if files.is_empty() {
            reporter.info(format!("No {} files found.", kind.display_name()));
            continue;
        }
        reporter.info(format!(
            "Found {} {} file(s)",
            files.len(),
            kind.display_name()
        ));

        Xgettext {
            keywords: &request.keywords,
            output,
            join_existing: has_content(output),
            language,
            files: &files,
        }
        .run(&request.project_root)
        .with_context(|| format!("Failed to extract strings from {} files", language))?;
    }

    if request.scans_json() {
        reporter.step("Scanning metadata.json and settings-schema.json files...");
        let (mut template, existing) = Template::open_or_new(output)?;
        let json = scan_json_files(
            &request.project_root,
            &mut template,
            &request.ignored_schema_keys,
            reporter,
        )?;

        if existing {
            template.save()?;
        } else {
            template.save_as(output)?;
        }
        summary.json = Some(json);
    }

    summary.template_written = has_content(output);
    Ok(summary)
}

fn has_content(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}
