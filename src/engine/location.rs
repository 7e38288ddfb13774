//! Location comments attached to template entries.
//!
//! A location is a breadcrumb such as `applet/settings-schema.json->font->description`.
//! Path components and key segments are joined with [`SEPARATOR`], which cannot
//! appear in a path produced by [`Path::components`].

use std::path::{Component, Path};

pub const SEPARATOR: &str = "->";

/// Render a path relative to the project root as the head of a location comment.
///
/// Only normal components are kept, so `./po/../settings-schema.json` style
/// paths never leak `.` or `..` into the comment.
pub fn path_label(rel_path: &Path) -> String {
    rel_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Join a path label and key segments into a location comment.
///
/// Empty segments are kept: a top-level settings key has an empty parent and
/// renders as `settings-schema.json->->description`.
pub fn join<S: AsRef<str>>(label: &str, segments: &[S]) -> String {
    let mut location = String::from(label);
    for segment in segments {
        location.push_str(SEPARATOR);
        location.push_str(segment.as_ref());
    }
    location
}
