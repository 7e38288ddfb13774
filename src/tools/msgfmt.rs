use std::{path::Path, process::Command};

use anyhow::Result;

pub const PROGRAM: &str = "msgfmt";

/// Compile `po_file` into the binary catalog `mo_file`, checking the input first.
pub fn compile(po_file: &Path, mo_file: &Path) -> Result<()> {
    super::run(
        Command::new(PROGRAM)
            .arg("-c")
            .arg(po_file)
            .arg("-o")
            .arg(mo_file),
    )?;
    Ok(())
}
