//! Common filesystem helpers shared across the codebase.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Changes the process working directory and restores it when dropped.
///
/// Restoring happens on every exit path, including `?` returns and panics
/// unwinding through the owning scope.
#[must_use = "the previous directory is restored when the guard is dropped"]
pub struct WorkingDirGuard {
    previous: PathBuf,
}

impl WorkingDirGuard {
    pub fn enter(dir: &Path) -> Result<Self> {
        let previous = env::current_dir().context("Failed to read current directory")?;
        env::set_current_dir(dir)
            .with_context(|| format!("Failed to enter directory: {}", dir.display()))?;
        Ok(Self { previous })
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}

/// Remove `path` and every directory below it that ends up empty, bottom-up.
///
/// Returns the removed directories in removal order.
pub fn remove_empty_dirs(path: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    remove_empty_dirs_into(path, &mut removed)?;
    Ok(removed)
}

fn remove_empty_dirs_into(path: &Path, removed: &mut Vec<PathBuf>) -> Result<()> {
    if !path.is_dir() || path.is_symlink() {
        return Ok(());
    }

    for entry in fs::read_dir(path)? {
        let child = entry?.path();
        if child.is_dir() {
            remove_empty_dirs_into(&child, removed)?;
        }
    }

    if fs::read_dir(path)?.next().is_none() {
        fs::remove_dir(path)
            .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
        removed.push(path.to_path_buf());
    }
    Ok(())
}

/// Create `dir` and its parents, with mode 0755 on unix.
pub fn create_dir_all_public(dir: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder
        .create(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}
