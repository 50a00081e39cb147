//! # View composition
//!
//! Turns the full collection into the exact visible list for one screen.
//! Two stages, always in this order:
//!
//! 1. **Section filter**: one case per [`ViewMode`] variant. Archived
//!    notes appear in the `Archived` section and nowhere else; a tag or
//!    category filter never resurrects an archived note, whatever its
//!    tags or category say.
//! 2. **Search filter**: a trimmed, lowercased free-text query applied to
//!    the section result. Empty queries are a no-op. A non-empty query
//!    keeps a note when the title, the content, or any single tag contains
//!    it as a substring (case-insensitive, not tokenized, not fuzzy).
//!
//! Ordering is stable: the output preserves the collection's insertion
//! order (newest first), and search never re-ranks by relevance.

use crate::facets::category_label;
use crate::model::Note;

/// The page/section the user is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Active (non-archived) notes.
    All,
    /// Archived notes only.
    Archived,
    /// Active notes carrying the given tag.
    Tag(String),
    /// Active notes filed under the given category label. The label is
    /// compared sentinel-substituted, so `Category("Uncategorized")`
    /// matches notes with no stored category.
    Category(String),
    /// The standalone search page over active notes.
    Search(String),
}

impl ViewMode {
    /// Build the mode from the navigation parameters the view layer
    /// carries around (`view=archived`, `tag=<name>`, `category=<name>`).
    /// The tag parameter wins over `view`, matching how the navigation
    /// links are generated.
    pub fn from_params(
        view: Option<&str>,
        tag: Option<&str>,
        category: Option<&str>,
    ) -> ViewMode {
        if let Some(tag) = tag {
            return ViewMode::Tag(tag.to_string());
        }
        if let Some(category) = category {
            return ViewMode::Category(category.to_string());
        }
        match view {
            Some("archived") => ViewMode::Archived,
            _ => ViewMode::All,
        }
    }
}

/// Compose section filter and search filter into the visible list.
pub fn visible_notes<'a>(notes: &'a [Note], mode: &ViewMode, query: &str) -> Vec<&'a Note> {
    let section: Vec<&Note> = match mode {
        ViewMode::All => notes.iter().filter(|n| !n.is_archived).collect(),
        ViewMode::Archived => notes.iter().filter(|n| n.is_archived).collect(),
        ViewMode::Tag(tag) => notes
            .iter()
            .filter(|n| !n.is_archived && n.tags.iter().any(|t| t == tag))
            .collect(),
        ViewMode::Category(label) => notes
            .iter()
            .filter(|n| !n.is_archived && category_label(n) == label)
            .collect(),
        ViewMode::Search(q) => {
            let active: Vec<&Note> = notes.iter().filter(|n| !n.is_archived).collect();
            search_notes(active, q)
        }
    };

    search_notes(section, query)
}

/// Substring search over title, content and tags. Preserves input order.
pub fn search_notes<'a>(notes: Vec<&'a Note>, query: &str) -> Vec<&'a Note> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return notes;
    }

    notes
        .into_iter()
        .filter(|note| {
            let title_match = note.title.to_lowercase().contains(&q);
            let content_match = note.content.to_lowercase().contains(&q);
            let tag_match = note.tags.iter().any(|t| t.to_lowercase().contains(&q));
            title_match || content_match || tag_match
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::UNCATEGORIZED;
    use crate::model::Note;

    fn note(title: &str, content: &str, tags: &[&str]) -> Note {
        Note::new(
            title.to_string(),
            content.to_string(),
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn archived(title: &str, tags: &[&str]) -> Note {
        let mut n = note(title, "", tags);
        n.is_archived = true;
        n
    }

    #[test]
    fn all_excludes_archived() {
        let notes = vec![note("a", "", &[]), archived("b", &[]), note("c", "", &[])];
        let visible = visible_notes(&notes, &ViewMode::All, "");
        let titles: Vec<&str> = visible.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn archived_section_shows_archived_only() {
        let notes = vec![note("a", "", &[]), archived("b", &[])];
        let visible = visible_notes(&notes, &ViewMode::Archived, "");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "b");
    }

    #[test]
    fn tag_filter_never_shows_archived_notes_with_that_tag() {
        let notes = vec![note("a", "", &["home"]), archived("b", &["home"])];
        let visible = visible_notes(&notes, &ViewMode::Tag("home".into()), "");
        let titles: Vec<&str> = visible.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["a"]);
    }

    #[test]
    fn category_filter_matches_sentinel_for_absent_category() {
        let mut filed = note("filed", "", &[]);
        filed.category = Some("Work".into());
        let loose = note("loose", "", &[]);
        let notes = vec![filed, loose];

        let visible = visible_notes(&notes, &ViewMode::Category(UNCATEGORIZED.into()), "");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "loose");

        let visible = visible_notes(&notes, &ViewMode::Category("Work".into()), "");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "filed");
    }

    #[test]
    fn category_filter_excludes_archived() {
        let mut hidden = archived("hidden", &[]);
        hidden.category = Some("Work".into());
        let notes = vec![hidden];
        assert!(visible_notes(&notes, &ViewMode::Category("Work".into()), "").is_empty());
    }

    #[test]
    fn blank_query_is_a_no_op_preserving_order() {
        let notes = vec![note("z", "", &[]), note("a", "", &[]), note("m", "", &[])];
        let visible = visible_notes(&notes, &ViewMode::All, "   ");
        let titles: Vec<&str> = visible.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["z", "a", "m"]);
    }

    #[test]
    fn search_is_case_insensitive_substring_over_three_fields() {
        let notes = vec![
            note("Grocery List", "", &["Home"]),
            note("Taxes", "file by April", &[]),
        ];

        // "ril" only hits the content of the second note
        let hit = visible_notes(&notes, &ViewMode::All, "ril");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].title, "Taxes");

        // Tag matches count too, case-insensitively
        let hit = visible_notes(&notes, &ViewMode::All, "hOmE");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].title, "Grocery List");

        // Title substring
        let hit = visible_notes(&notes, &ViewMode::All, "grocery");
        assert_eq!(hit.len(), 1);
    }

    #[test]
    fn search_applies_after_the_section_filter() {
        let notes = vec![note("April plans", "", &[]), archived("April archive", &[])];

        let active = visible_notes(&notes, &ViewMode::All, "april");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "April plans");

        let archived_hits = visible_notes(&notes, &ViewMode::Archived, "april");
        assert_eq!(archived_hits.len(), 1);
        assert_eq!(archived_hits[0].title, "April archive");
    }

    #[test]
    fn search_does_not_reorder() {
        let notes = vec![
            note("bb april", "", &[]),
            note("april", "", &[]),
            note("a april tail", "", &[]),
        ];
        let hits = visible_notes(&notes, &ViewMode::All, "april");
        let titles: Vec<&str> = hits.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["bb april", "april", "a april tail"]);
    }

    #[test]
    fn search_mode_filters_active_notes_by_its_own_query() {
        let notes = vec![note("alpha", "", &[]), archived("alpha two", &[])];
        let hits = visible_notes(&notes, &ViewMode::Search("alpha".into()), "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "alpha");
    }

    #[test]
    fn composes_over_a_repository_projection() {
        use crate::store::memory::fixtures::RepoFixture;

        let repo = RepoFixture::new()
            .with_note("Grocery List", "milk", &["home"])
            .with_archived_note("Old plans", &["home"])
            .with_categorized_note("Standup notes", "Work")
            .build();

        let by_tag = visible_notes(repo.notes(), &ViewMode::Tag("home".into()), "");
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].title, "Grocery List");

        let by_category = visible_notes(repo.notes(), &ViewMode::Category("Work".into()), "milk");
        assert!(by_category.is_empty(), "search composes after the section");
    }

    #[test]
    fn from_params_maps_navigation_values() {
        assert_eq!(
            ViewMode::from_params(Some("archived"), None, None),
            ViewMode::Archived
        );
        assert_eq!(
            ViewMode::from_params(None, Some("home"), None),
            ViewMode::Tag("home".into())
        );
        assert_eq!(
            ViewMode::from_params(Some("archived"), Some("home"), None),
            ViewMode::Tag("home".into()),
            "tag parameter wins over view"
        );
        assert_eq!(
            ViewMode::from_params(None, None, Some("Work")),
            ViewMode::Category("Work".into())
        );
        assert_eq!(ViewMode::from_params(None, None, None), ViewMode::All);
        assert_eq!(ViewMode::from_params(Some("bogus"), None, None), ViewMode::All);
    }
}
