use anyhow::Result;

use super::{
    CommandSummary, StatsSummary,
    context::{CommandContext, absolute},
};
use crate::{
    cli::args::StatsArgs,
    completeness::{generate_report, write_report},
    tools::viewer,
};

pub fn stats(args: StatsArgs) -> Result<CommandSummary> {
    let ctx = CommandContext::new(&args.common)?;
    let template = match &args.pot_file {
        Some(path) => absolute(path)?,
        None => ctx.project.default_pot_path(),
    };

    let report = generate_report(
        &ctx.project.uuid,
        &ctx.project.root,
        &template,
        &ctx.reporter,
    )?;

    let report_path = match &report {
        Some(report) => {
            let path = write_report(report)?;
            if !args.no_open {
                ctx.reporter.info(format!("Opening {}", path.display()));
                viewer::open(&path)?;
            }
            Some(path)
        }
        None => None,
    };

    Ok(CommandSummary::Stats(StatsSummary {
        uuid: ctx.project.uuid,
        report,
        report_path,
        print_table: args.no_open,
    }))
}
