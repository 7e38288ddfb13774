use std::collections::HashSet;

use anyhow::Result;

use super::{
    CommandSummary, ExtractSummary,
    context::{CommandContext, absolute},
};
use crate::{
    cli::args::ExtractArgs,
    config::{PotSettings, load_pot_settings, settings_path},
    engine::{
        self, ExtractionRequest, SourceKind,
        request::{DEFAULT_KEYWORD, compile_patterns},
    },
    header::rewrite_header,
};

pub fn extract(args: ExtractArgs) -> Result<CommandSummary> {
    let ctx = CommandContext::new(&args.common)?;
    ExtractRunner::new(&ctx, &args)?.run()
}

/// Turns the `extract` arguments into an [`ExtractionRequest`] and runs it.
pub struct ExtractRunner<'a> {
    ctx: &'a CommandContext,
    args: &'a ExtractArgs,
    settings: Option<PotSettings>,
    request: ExtractionRequest,
}

impl<'a> ExtractRunner<'a> {
    pub fn new(ctx: &'a CommandContext, args: &'a ExtractArgs) -> Result<Self> {
        let output = match &args.output {
            Some(path) => absolute(path)?,
            None => ctx.project.default_pot_path(),
        };
        let settings = load_pot_settings(&settings_path(&output), &ctx.reporter);
        let request = build_request(ctx, args, output, settings.as_ref())?;

        Ok(Self {
            ctx,
            args,
            settings,
            request,
        })
    }

    pub fn request(&self) -> &ExtractionRequest {
        &self.request
    }

    pub fn run(self) -> Result<CommandSummary> {
        let reporter = &self.ctx.reporter;
        let project = &self.ctx.project;
        reporter.step(format!("Generating template for {}", project.uuid));

        let extraction = engine::extract(&self.request, reporter)?;

        let custom_header = self.args.custom_header && extraction.template_written;
        if custom_header {
            rewrite_header(
                &project.root,
                &project.uuid,
                &self.request.output_path,
                self.settings.as_ref(),
                reporter,
            )?;
        } else if self.args.custom_header {
            reporter.warn("No template was generated, header left untouched.");
        }

        Ok(CommandSummary::Extract(ExtractSummary {
            uuid: project.uuid.clone(),
            output: self.request.output_path,
            extraction,
            custom_header,
        }))
    }
}

fn build_request(
    ctx: &CommandContext,
    args: &ExtractArgs,
    output: std::path::PathBuf,
    settings: Option<&PotSettings>,
) -> Result<ExtractionRequest> {
    let mut request = ExtractionRequest::new(ctx.project.root.clone(), output);

    if args.skip_js {
        request.source_kinds.remove(&SourceKind::JavaScript);
    }
    if args.skip_python {
        request.source_kinds.remove(&SourceKind::Python);
    }
    if args.skip_json {
        request.source_kinds.remove(&SourceKind::Json);
    }

    request.ignored_patterns = compile_patterns(&args.ignored_patterns)?;
    request.additional_files = args.additional_files.clone();

    let mut ignored_keys: HashSet<String> = args.skip_keys.iter().cloned().collect();
    if let Some(settings) = settings {
        ignored_keys.extend(settings.skip_keys.iter().cloned());
    }
    request.ignored_schema_keys = ignored_keys;

    request.keywords = dedup_keywords(&args.keywords);

    Ok(request)
}

/// Given keywords in first-seen order, or the default keyword when none were given.
fn dedup_keywords(keywords: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let unique: Vec<String> = keywords
        .iter()
        .filter(|k| seen.insert(k.as_str()))
        .cloned()
        .collect();
    if unique.is_empty() {
        vec![DEFAULT_KEYWORD.to_string()]
    } else {
        unique
    }
}
