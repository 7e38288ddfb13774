use anyhow::Result;

use super::{CommandSummary, RemoveSummary, context::CommandContext};
use crate::{
    cli::args::LocaleStoreArgs,
    locale_store::{self, default_locale_dir},
};

pub fn remove(args: LocaleStoreArgs) -> Result<CommandSummary> {
    let ctx = CommandContext::new(&args.common)?;
    let locale_dir = match args.locale_dir {
        Some(dir) => dir,
        None => default_locale_dir()?,
    };

    ctx.reporter.step(format!("Removing translations for {}", ctx.project.uuid));
    let removed = locale_store::remove(&ctx.project.uuid, &locale_dir, &ctx.reporter)?;

    Ok(CommandSummary::Remove(RemoveSummary {
        uuid: ctx.project.uuid,
        locale_dir,
        removed,
    }))
}
