//! Walker for `settings-schema.json` documents.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::{Candidate, location};
use crate::reporter::Reporter;

/// Keys whose string value is shown to the user.
pub const TEXT_KEYS: &[&str] = &["description", "tooltip", "units", "title"];

/// Keys read from each entry of a `columns` list.
pub const COLUMN_KEYS: &[&str] = &["title", "units"];

/// Option label that selects a free-form value and is never translated.
pub const CUSTOM_OPTION: &str = "custom";

/// Collect translatable strings from a settings schema.
///
/// `label` is the rendered relative path of the file (see [`location::path_label`]).
/// Keys listed in `ignored_keys` are skipped at any depth together with
/// everything nested below them.
pub fn extract_schema_strings(
    data: &Value,
    label: &str,
    ignored_keys: &HashSet<String>,
    reporter: &Reporter,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    if let Value::Object(map) = data {
        walk(map, label, "", ignored_keys, reporter, &mut candidates);
    }
    candidates
}

fn walk(
    map: &Map<String, Value>,
    label: &str,
    parent: &str,
    ignored_keys: &HashSet<String>,
    reporter: &Reporter,
    out: &mut Vec<Candidate>,
) {
    for (key, value) in map {
        if ignored_keys.contains(key) {
            reporter.detail(format!("Key <{}> ignored.", key));
            continue;
        }

        match key.as_str() {
            k if TEXT_KEYS.contains(&k) => {
                if let Some(text) = value.as_str() {
                    out.push(Candidate::new(text, location::join(label, &[parent, k])));
                }
            }
            "options" => {
                if let Value::Object(options) = value {
                    let location = location::join(label, &[parent, "options"]);
                    options
                        .values()
                        .filter_map(Value::as_str)
                        .filter(|text| *text != CUSTOM_OPTION)
                        .for_each(|text| out.push(Candidate::new(text, location.clone())));
                }
            }
            "columns" => {
                if let Value::Array(columns) = value {
                    for column in columns.iter().filter_map(Value::as_object) {
                        for (column_key, column_value) in column {
                            if !COLUMN_KEYS.contains(&column_key.as_str()) {
                                continue;
                            }
                            if let Some(text) = column_value.as_str() {
                                out.push(Candidate::new(
                                    text,
                                    location::join(label, &[parent, "columns", column_key]),
                                ));
                            }
                        }
                    }
                }
            }
            _ => {}
        }

        if let Value::Object(nested) = value {
            walk(nested, label, key, ignored_keys, reporter, out);
        }
    }
}
