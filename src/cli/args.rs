//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: generate the translation template of an xlet
//! - `install`: compile and install the xlet's translations for the current user
//! - `remove`: remove the installed translations
//! - `stats`: report untranslated strings per language

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Extract(args)) => Some(&args.common),
            Some(Command::Install(args)) => Some(&args.common),
            Some(Command::Remove(args)) => Some(&args.common),
            Some(Command::Stats(args)) => Some(&args.common),
            None => None,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path to the xlet directory
    #[arg(short = 'x', long, value_name = "PATH", default_value = ".")]
    pub xlet_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Do not scan JavaScript files
    #[arg(short = 'j', long)]
    pub skip_js: bool,

    /// Do not scan Python files
    #[arg(short = 'p', long)]
    pub skip_python: bool,

    /// Do not scan settings-schema.json and metadata.json files
    #[arg(long)]
    pub skip_json: bool,

    /// Where to write the template (default: <xlet>/po/<uuid>.pot)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Rewrite the template header with data from metadata.json and po/<uuid>.json
    #[arg(short, long)]
    pub custom_header: bool,

    /// Additional .js/.py files outside the xlet to scan (absolute or relative to the xlet)
    #[arg(short = 'a', long = "scan-additional-file", value_name = "PATH", num_args = 1..)]
    pub additional_files: Vec<PathBuf>,

    /// settings-schema.json key to leave out of the template
    #[arg(short = 's', long = "skip-key", value_name = "KEY", num_args = 1..)]
    pub skip_keys: Vec<String>,

    /// Keyword passed to xgettext (default: _). Replaces the default when given.
    #[arg(short = 'k', long = "keyword", value_name = "KEYWORD", num_args = 1..)]
    pub keywords: Vec<String>,

    /// Glob pattern of files to leave out when scanning source files
    #[arg(short = 'g', long = "ignored-pattern", value_name = "PATTERN", num_args = 1..)]
    pub ignored_patterns: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub struct LocaleStoreArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Locale store to use (default: ~/.local/share/locale)
    #[arg(long, value_name = "PATH", env = "XLET_MAKEPOT_LOCALE_DIR")]
    pub locale_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Template to compare against (default: <xlet>/po/<uuid>.pot)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub pot_file: Option<PathBuf>,

    /// Print the table instead of opening it in the default viewer
    #[arg(long)]
    pub no_open: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings into the xlet's translation template
    Extract(ExtractArgs),
    /// Compile the xlet's .po files and install them for the current user
    Install(LocaleStoreArgs),
    /// Remove the xlet's installed translations
    Remove(LocaleStoreArgs),
    /// Count untranslated strings in each of the xlet's .po files
    Stats(StatsArgs),
}
