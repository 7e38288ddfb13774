use super::template::Template;

/// Outcome of folding one candidate into a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Blank text, nothing recorded.
    Skipped,
    Created,
    LocationAdded,
    /// Text and location were both already present.
    Unchanged,
}

/// Fold a `(text, location)` candidate into `template`.
///
/// Blank text is ignored. Entry identity is the exact text, so trimming only
/// decides whether the candidate is blank; the stored text is left as found.
/// A location already attached to the entry is not added twice.
pub fn merge_entry(template: &mut Template, text: &str, location: &str) -> MergeOutcome {
    if text.trim().is_empty() {
        return MergeOutcome::Skipped;
    }

    match template.locations(text) {
        Some(mut locations) => {
            if locations.iter().any(|existing| existing == location) {
                return MergeOutcome::Unchanged;
            }
            locations.push(location.to_string());
            template.set_locations(text, &locations);
            MergeOutcome::LocationAdded
        }
        None => {
            template.push(text, location);
            MergeOutcome::Created
        }
    }
}
