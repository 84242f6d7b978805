// Change-aware diffing of task references.
//
// When a PR description is edited we only want to comment on tasks whose
// links were added by that edit. Links already present in the previous body
// have been announced before.

use tracing::info;

use super::extract::TaskLinkExtractor;
use super::ReferenceSet;

/// References in `current` that were not already in `previous`.
///
/// With no previous text (creation events, comments) this is simply every
/// reference in `current`.
pub fn new_references(
    extractor: &TaskLinkExtractor,
    current: &str,
    previous: Option<&str>,
) -> ReferenceSet {
    let current_refs = extractor.extract(current);

    let Some(previous) = previous else {
        return current_refs;
    };

    let previous_refs = extractor.extract(previous);
    let added = current_refs.difference(&previous_refs);

    info!(
        current = current_refs.len(),
        previous = previous_refs.len(),
        added = added.len(),
        "Compared task links against previous revision"
    );

    added
}
