//! Walker for `metadata.json` documents.

use serde_json::Value;

use super::{Candidate, location};

/// Plain string fields shown to users in the xlet manager.
pub const TEXT_KEYS: &[&str] = &["name", "description", "comments"];

pub const CONTRIBUTORS_KEY: &str = "contributors";

/// Collect translatable strings from a metadata document.
///
/// `contributors` may be a comma-separated string or a list of names; every
/// name becomes its own candidate and all of them share one location.
pub fn extract_metadata_strings(data: &Value, label: &str) -> Vec<Candidate> {
    let Value::Object(map) = data else {
        return Vec::new();
    };

    let mut candidates = Vec::new();
    for (key, value) in map {
        if TEXT_KEYS.contains(&key.as_str()) {
            if let Some(text) = value.as_str() {
                candidates.push(Candidate::new(text, location::join(label, &[key])));
            }
        } else if key == CONTRIBUTORS_KEY {
            let location = location::join(label, &[key]);
            for name in contributor_names(value) {
                candidates.push(Candidate::new(name, location.clone()));
            }
        }
    }
    candidates
}

fn contributor_names(value: &Value) -> Vec<&str> {
    match value {
        Value::String(names) => names.split(',').map(str::trim).collect(),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .collect(),
        _ => Vec::new(),
    }
}
