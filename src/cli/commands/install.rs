use anyhow::Result;

use super::{CommandSummary, InstallSummary, context::CommandContext};
use crate::{
    cli::args::LocaleStoreArgs,
    locale_store::{self, default_locale_dir},
};

pub fn install(args: LocaleStoreArgs) -> Result<CommandSummary> {
    let ctx = CommandContext::new(&args.common)?;
    let locale_dir = match args.locale_dir {
        Some(dir) => dir,
        None => default_locale_dir()?,
    };

    ctx.reporter.step(format!("Installing translations for {}", ctx.project.uuid));
    let installed = locale_store::install(
        &ctx.project.uuid,
        &ctx.project.root,
        &locale_dir,
        &ctx.reporter,
    )?;

    Ok(CommandSummary::Install(InstallSummary {
        uuid: ctx.project.uuid,
        locale_dir,
        installed,
    }))
}
