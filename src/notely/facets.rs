//! Derives the sidebar facets (unique tags and categories) from the
//! current collection. Order is first-seen; callers sort for display if
//! they want to.

use crate::model::Note;

/// Sentinel label standing in for notes with no category. The substitution
/// happens here (and only here, via [`category_label`]) so the rest of the
/// crate never special-cases an absent category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// The label a note files under, sentinel-substituted.
pub fn category_label(note: &Note) -> &str {
    note.category.as_deref().unwrap_or(UNCATEGORIZED)
}

/// Every distinct tag across the collection, first-seen order.
pub fn unique_tags(notes: &[Note]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for note in notes {
        for tag in &note.tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Every distinct category label across the collection, first-seen order.
/// An empty collection yields an empty set, not the sentinel alone.
pub fn unique_categories(notes: &[Note]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for note in notes {
        let label = category_label(note);
        if !categories.iter().any(|c| c == label) {
            categories.push(label.to_string());
        }
    }
    categories
}
