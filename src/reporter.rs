//! User-facing progress reporting.
//!
//! A single [`Reporter`] is built by the CLI and handed by reference to every
//! runner and pipeline step, so the library never prints on its own.

use colored::Colorize;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbose: bool,
    quiet: bool,
}

impl Reporter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// A reporter that only lets warnings through. Used by tests and library callers.
    pub fn silent() -> Self {
        Self {
            verbose: false,
            quiet: true,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Heading for a pipeline step, e.g. "Scanning JavaScript files...".
    pub fn step(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{}", message.as_ref().bold());
        }
    }

    pub fn info(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{}", message.as_ref());
        }
    }

    /// Detail line only shown with `--verbose`.
    pub fn detail(&self, message: impl AsRef<str>) {
        if self.is_verbose() {
            eprintln!("  {}", message.as_ref().dimmed());
        }
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        eprintln!("{} {}", "warning:".bold().yellow(), message.as_ref());
    }

    pub fn success(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{} {}", SUCCESS_MARK.green(), message.as_ref().green());
        }
    }
}
