use std::{
    collections::{BTreeSet, HashSet},
    path::PathBuf,
};

use anyhow::{Context, Result};
use glob::Pattern;

/// Kinds of files strings are extracted from.
///
/// The derived order is the order the external extractor runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceKind {
    JavaScript,
    Python,
    Json,
}

impl SourceKind {
    pub fn extension(self) -> &'static str {
        match self {
            SourceKind::JavaScript => "js",
            SourceKind::Python => "py",
            SourceKind::Json => "json",
        }
    }

    /// Value for `xgettext --language`. `None` for kinds scanned in-process.
    pub fn xgettext_language(self) -> Option<&'static str> {
        match self {
            SourceKind::JavaScript => Some("JavaScript"),
            SourceKind::Python => Some("Python"),
            SourceKind::Json => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SourceKind::JavaScript => "JavaScript",
            SourceKind::Python => "Python",
            SourceKind::Json => "JSON",
        }
    }
}

/// Everything one extraction run needs. Built once, never mutated during the run.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Absolute path of the xlet directory.
    pub project_root: PathBuf,
    /// Absolute path of the template to generate.
    pub output_path: PathBuf,
    pub source_kinds: BTreeSet<SourceKind>,
    pub ignored_patterns: Vec<Pattern>,
    pub ignored_schema_keys: HashSet<String>,
    /// Files outside the project tree, passed to the extractor verbatim.
    pub additional_files: Vec<PathBuf>,
    pub keywords: Vec<String>,
}

pub const DEFAULT_KEYWORD: &str = "_";

impl ExtractionRequest {
    pub fn new(project_root: PathBuf, output_path: PathBuf) -> Self {
        Self {
            project_root,
            output_path,
            source_kinds: [SourceKind::JavaScript, SourceKind::Python, SourceKind::Json]
                .into_iter()
                .collect(),
            ignored_patterns: Vec::new(),
            ignored_schema_keys: HashSet::new(),
            additional_files: Vec::new(),
            keywords: vec![DEFAULT_KEYWORD.to_string()],
        }
    }

    /// Enabled kinds handled by the external extractor, in run order.
    pub fn external_kinds(&self) -> impl Iterator<Item = SourceKind> + '_ {
        self.source_kinds
            .iter()
            .copied()
            .filter(|kind| kind.xgettext_language().is_some())
    }

    pub fn scans_json(&self) -> bool {
        self.source_kinds.contains(&SourceKind::Json)
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignored_patterns.iter().any(|p| p.matches(path))
    }
}

/// Compile glob patterns, failing on the first invalid one.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p))
        })
        .collect()
}
