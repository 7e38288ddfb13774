use anyhow::Result;

use crate::reporter::Reporter;

pub mod args;
pub mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let reporter = args
        .common()
        .map(|common| Reporter::new(common.verbose, common.quiet))
        .unwrap_or_default();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let summary = run::run(args)?;
    report::print(&summary, &reporter);

    Ok(ExitStatus::Success)
}
