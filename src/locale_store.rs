//! Install and remove compiled translations in the user's locale store.
//!
//! Compiled catalogs live at `<locale dir>/<language>/LC_MESSAGES/<uuid>.mo`,
//! so the xlet uuid doubles as the gettext domain.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::{
    completeness::localized_files,
    reporter::Reporter,
    tools::{self, msgfmt},
    utils::{create_dir_all_public, remove_empty_dirs},
};

pub const MESSAGES_DIR: &str = "LC_MESSAGES";

/// `~/.local/share/locale`, where per-user translations are looked up.
pub fn default_locale_dir() -> Result<PathBuf> {
    dirs_next::home_dir()
        .map(|home| home.join(".local").join("share").join("locale"))
        .context("Could not determine the home directory")
}

pub fn compiled_path(locale_dir: &Path, language: &str, uuid: &str) -> PathBuf {
    locale_dir
        .join(language)
        .join(MESSAGES_DIR)
        .join(format!("{}.mo", uuid))
}

/// Compile every localized file under `<xlet>/po` into the locale store.
pub fn install(
    uuid: &str,
    xlet_dir: &Path,
    locale_dir: &Path,
    reporter: &Reporter,
) -> Result<usize> {
    let po_dir = xlet_dir.join("po");
    if !po_dir.is_dir() {
        bail!(
            "The 'po' directory seems not to be present.\n\
             This xlet might not have localizations that need to be installed.\n\
             Or this tool has not been executed from inside the xlet folder."
        );
    }
    tools::require(msgfmt::PROGRAM, tools::GETTEXT_HINT)?;

    let mut installed = 0;
    for po_file in localized_files(&po_dir) {
        let Some(language) = po_file.file_stem().map(|s| s.to_string_lossy().to_string()) else {
            continue;
        };
        let target = compiled_path(locale_dir, &language, uuid);
        if let Some(parent) = target.parent() {
            create_dir_all_public(parent)?;
        }
        reporter.detail(format!("{} -> {}", po_file.display(), target.display()));
        msgfmt::compile(&po_file, &target)
            .with_context(|| format!("Failed to compile {}", po_file.display()))?;
        installed += 1;
    }

    Ok(installed)
}

/// Delete the compiled catalogs of `uuid` and prune directories left empty.
pub fn remove(uuid: &str, locale_dir: &Path, reporter: &Reporter) -> Result<usize> {
    if !locale_dir.is_dir() {
        return Ok(0);
    }

    let mut languages: Vec<PathBuf> = fs::read_dir(locale_dir)
        .with_context(|| format!("Failed to read {}", locale_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    languages.sort();

    let mut removed = 0;
    for language_dir in languages {
        let compiled = language_dir.join(MESSAGES_DIR).join(format!("{}.mo", uuid));
        if compiled.is_file() {
            fs::remove_file(&compiled)
                .with_context(|| format!("Failed to remove {}", compiled.display()))?;
            reporter.detail(format!("Removed {}", compiled.display()));
            removed += 1;
        }
        for dir in remove_empty_dirs(&language_dir)? {
            reporter.info(format!("Removing empty folder: {}", dir.display()));
        }
    }

    Ok(removed)
}
