//! Extraction-and-merge engine.
//!
//! Walks an xlet tree, decides which JSON values are translatable, and folds
//! them together with the strings pulled out of source files into a single
//! translation template.
//!
//! ## Module Structure
//!
//! - `request`: the immutable `ExtractionRequest` for one run
//! - `sources`: collects JavaScript/Python files for the external extractor
//! - `schema`, `metadata`: JSON walkers producing candidates
//! - `merge`: folds candidates into the template
//! - `template`: the entry store
//! - `json_scan`: tree walk that dispatches JSON files to the walkers
//! - `orchestrator`: ties the steps together for one run

pub mod json_scan;
pub mod location;
pub mod merge;
pub mod metadata;
pub mod orchestrator;
pub mod request;
pub mod schema;
pub mod sources;
pub mod template;

pub use merge::{MergeOutcome, merge_entry};
pub use orchestrator::{ExtractionSummary, extract};
pub use request::{ExtractionRequest, SourceKind};
pub use template::{Entry, Template};

/// A string found in a JSON file together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub location: String,
}

impl Candidate {
    pub fn new(text: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            location: location.into(),
        }
    }
}
