use std::{path::Path, process::Command};

use anyhow::Result;

pub const PROGRAM: &str = "xdg-open";

/// Hand `path` to the desktop's default application.
pub fn open(path: &Path) -> Result<()> {
    super::run(Command::new(PROGRAM).arg(path))?;
    Ok(())
}
