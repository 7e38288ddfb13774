//! Wrappers around the GNU gettext programs and the desktop viewer.
//!
//! Every call blocks until the child exits. A non-zero exit status is an
//! error that carries the program's own diagnostics.

pub mod msgfmt;
pub mod msgmerge;
pub mod viewer;
pub mod xgettext;

use std::process::{Command, Output};

use anyhow::{Context, Result, bail};

/// Check whether `program` can be started from `PATH`.
pub fn is_available(program: &str) -> bool {
    Command::new(program).arg("--version").output().is_ok()
}

/// Fail with a configuration error when `program` is missing.
pub fn require(program: &str, hint: &str) -> Result<()> {
    if !is_available(program) {
        bail!("{} command not found. {}", program, hint);
    }
    Ok(())
}

pub const GETTEXT_HINT: &str = "You may need to install the gettext package.";

/// Run `cmd` to completion and return its output, failing on a non-zero exit.
pub fn run(cmd: &mut Command) -> Result<Output> {
    let program = cmd.get_program().to_string_lossy().to_string();
    let output = cmd
        .output()
        .with_context(|| format!("Failed to execute {}", program))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "{} exited with {}:\n{}",
            program,
            output.status,
            stderr.trim_end()
        );
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_reported() {
        let program = "xlet-makepot-no-such-program";
        assert!(!is_available(program));
        let err = require(program, GETTEXT_HINT).unwrap_err();
        assert!(err.to_string().contains(program));
    }

    #[test]
    fn test_spawn_failure_names_program() {
        let err = run(&mut Command::new("xlet-makepot-no-such-program")).unwrap_err();
        assert!(err.to_string().contains("xlet-makepot-no-such-program"));
    }
}
