//! Collects the source files handed to the external extractor.

use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};

use walkdir::{DirEntry, WalkDir};

use super::request::{ExtractionRequest, SourceKind};
use crate::reporter::Reporter;

/// Top-down walk of `root` where the files of a directory come before its
/// subdirectories, both sorted by name.
pub fn sorted_walk(root: &Path) -> WalkDir {
    WalkDir::new(root).sort_by(files_before_dirs)
}

fn files_before_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Files of `kind` to extract from: additional files with the right extension
/// plus every matching file under the project root, minus ignored patterns.
///
/// Project files are relative to the project root, additional files are kept
/// as given. The result is sorted and free of duplicates.
pub fn collect_source_files(
    request: &ExtractionRequest,
    kind: SourceKind,
    reporter: &Reporter,
) -> Vec<String> {
    let mut files: Vec<String> = request
        .additional_files
        .iter()
        .filter(|path| has_extension(path, kind))
        .map(|path| path.to_string_lossy().to_string())
        .collect();

    if !files.is_empty() {
        reporter.info(format!(
            "Including the following additional {} file(s):",
            kind.display_name()
        ));
        for file in &files {
            reporter.info(format!("  {}", file));
        }
    }

    for entry in sorted_walk(&request.project_root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                reporter.warn(format!("Cannot access path: {}", e));
                continue;
            }
        };
        if entry.file_type().is_dir() || !has_extension(entry.path(), kind) {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(&request.project_root) {
            files.push(relative.to_string_lossy().to_string());
        }
    }

    files.retain(|file| {
        let ignored = request.is_ignored(file);
        if ignored {
            reporter.detail(format!("Ignoring {}", file));
        }
        !ignored
    });
    files.sort();
    files.dedup();
    files
}

fn has_extension(path: &Path, kind: SourceKind) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(kind.extension())
}

/// Convenience for callers holding owned paths.
pub fn to_relative(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
