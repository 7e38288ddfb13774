//! xlet-makepot - translation template tooling for Cinnamon xlets
//!
//! Builds the gettext template of an applet, desklet or extension from its
//! JavaScript and Python sources plus the strings in its `settings-schema.json`
//! and `metadata.json` files, and manages the xlet's translations: installing
//! and removing compiled catalogs and reporting how complete each one is.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, runners, final report)
//! - `engine`: Extraction-and-merge engine producing the template
//! - `header`: Custom template header
//! - `completeness`: Untranslated-string counts per localized file
//! - `locale_store`: Install/remove compiled catalogs
//! - `config`: Per-project settings next to the template
//! - `tools`: Wrappers around the gettext programs and the file viewer
//! - `reporter`: User-facing progress output
//! - `utils`: Shared filesystem helpers

pub mod cli;
pub mod completeness;
pub mod config;
pub mod engine;
pub mod header;
pub mod locale_store;
pub mod reporter;
pub mod tools;
pub mod utils;
