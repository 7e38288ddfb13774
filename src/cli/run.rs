//! Dispatches to the command runner selected by the parsed arguments.
use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandSummary, extract::extract, install::install, remove::remove, stats::stats,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandSummary> {
    match command {
        Some(Command::Extract(args)) => extract(args),
        Some(Command::Install(args)) => install(args),
        Some(Command::Remove(args)) => remove(args),
        Some(Command::Stats(args)) => stats(args),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
