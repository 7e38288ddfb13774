use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod extract;
mod locale;
mod stats;

const BIN_NAME: &str = "xlet-makepot";

/// An xlet directory inside a temp dir, named like a real xlet uuid.
pub struct CliTest {
    temp_dir: TempDir,
    xlet_dir: PathBuf,
    uuid: String,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        Self::named("demo@xlet-makepot")
    }

    /// Tests touching the per-uuid scratch directory need a uuid of their own.
    pub fn named(uuid: &str) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let xlet_dir = temp_dir.path().canonicalize()?.join(uuid);
        fs::create_dir_all(&xlet_dir)?;
        Ok(Self {
            temp_dir,
            xlet_dir,
            uuid: uuid.to_string(),
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.xlet_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn root(&self) -> &Path {
        &self.xlet_dir
    }

    /// Directory next to the xlet, for files that live outside it.
    pub fn outside(&self) -> PathBuf {
        self.temp_dir.path().join("outside")
    }

    pub fn pot_path(&self) -> PathBuf {
        self.xlet_dir.join("po").join(format!("{}.pot", self.uuid))
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.xlet_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        if let Some(path) = std::env::var_os("PATH") {
            cmd.env("PATH", path); // gettext tools are looked up on PATH
        }
        cmd
    }

    /// `extract` limited to the JSON scan, which needs no external tool.
    pub fn extract_json_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["extract", "--skip-js", "--skip-python"]);
        cmd
    }

    pub fn locale_command(&self, subcommand: &str, locale_dir: &Path) -> Command {
        let mut cmd = self.command();
        cmd.arg(subcommand).arg("--locale-dir").arg(locale_dir);
        cmd
    }

    pub fn stats_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["stats", "--no-open"]);
        cmd
    }
}

pub fn tool_available(program: &str) -> bool {
    xlet_makepot::tools::is_available(program)
}
