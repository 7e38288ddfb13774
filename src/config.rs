//! Per-project settings stored next to the template.
//!
//! `po/<uuid>.json` (or `<output stem>.json` for a custom output) may carry the
//! header author override and schema keys to skip:
//!
//! ```json
//! {
//!     "FIRST_AUTHOR": "Jane Doe",
//!     "FIRST_AUTHOR_EMAIL": "<jane@example.com>",
//!     "COPY_INITIAL_YEAR": "2019",
//!     "SKIP_KEYS": ["custom-css"]
//! }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::reporter::Reporter;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PotSettings {
    #[serde(default)]
    pub first_author: Option<String>,
    #[serde(default)]
    pub first_author_email: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub copy_initial_year: Option<String>,
    #[serde(default)]
    pub skip_keys: Vec<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Settings file belonging to the template at `pot_path`.
pub fn settings_path(pot_path: &Path) -> PathBuf {
    pot_path.with_extension("json")
}

pub fn parse_pot_settings(path: &Path) -> Result<PotSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))
}

/// Load the settings file if present.
///
/// A missing file is normal. An unreadable or invalid one is reported and
/// treated as missing.
pub fn load_pot_settings(path: &Path, reporter: &Reporter) -> Option<PotSettings> {
    if !path.exists() {
        reporter.detail(format!("No settings file at {}", path.display()));
        return None;
    }
    match parse_pot_settings(path) {
        Ok(settings) => Some(settings),
        Err(err) => {
            reporter.warn(format!("{:#}", err));
            None
        }
    }
}
