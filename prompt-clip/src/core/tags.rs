//! Tag deduplication against the known tag set

use shared::models::{PromptCollection, Tag};

/// Replace every pending tag whose name the store already knows with the
/// stored tag, so the saved prompt carries the stored id. Unknown names keep
/// their client-generated id and become new tags.
pub fn resolve_tags(pending: &[Tag], known: Option<&PromptCollection>) -> Vec<Tag> {
    pending
        .iter()
        .map(|tag| {
            known
                .and_then(|c| c.find_tag_by_name(&tag.name))
                .unwrap_or(tag)
                .clone()
        })
        .collect()
}
