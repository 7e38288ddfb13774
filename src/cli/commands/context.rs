use std::path::{Component, Path, PathBuf};

use anyhow::{Context as _, Result, bail};

use crate::{cli::args::CommonArgs, reporter::Reporter};

/// The xlet a command operates on.
///
/// The directory name is the xlet uuid, which is also the gettext domain and
/// the stem of the template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XletProject {
    pub root: PathBuf,
    pub uuid: String,
}

impl XletProject {
    pub fn resolve(dir: &Path) -> Result<Self> {
        let root = absolute(dir)?;
        if !root.is_dir() {
            bail!("{} does not exist.", root.display());
        }

        // `..` survives `absolute`, so `-x ..` would leave no file name.
        let root = if root.components().any(|c| c == Component::ParentDir) {
            root.canonicalize()
                .with_context(|| format!("Failed to resolve {}", root.display()))?
        } else {
            root
        };

        let uuid = root
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .with_context(|| format!("Could not determine the xlet uuid of {}", root.display()))?;

        Ok(Self { root, uuid })
    }

    pub fn po_dir(&self) -> PathBuf {
        self.root.join("po")
    }

    /// `<xlet>/po/<uuid>.pot`
    pub fn default_pot_path(&self) -> PathBuf {
        self.po_dir().join(format!("{}.pot", self.uuid))
    }
}

/// Everything a runner needs besides its own arguments.
pub struct CommandContext {
    pub project: XletProject,
    pub reporter: Reporter,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        Ok(Self {
            project: XletProject::resolve(&common.xlet_dir)?,
            reporter: Reporter::new(common.verbose, common.quiet),
        })
    }
}

/// Absolute form of `path` without touching the filesystem.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("Failed to resolve {}", path.display()))
}
