//! # Domain Model: the Note record
//!
//! A [`Note`] is the canonical record of the collection. Its persisted shape
//! uses the historical field names (`isArchived`, `lastEdited`, ISO-8601
//! timestamps) so existing data files and exported backups keep loading.
//!
//! ## Identity
//!
//! `id` is a random UUIDv4 assigned exactly once, at creation, and never
//! touched again. Records arriving without an id (seed documents, old
//! backups) are backfilled with a fresh one during deserialization, so by
//! the time a `Note` exists in memory it always has a stable identity.
//!
//! ## Tag hygiene
//!
//! `tags` never contains an empty or whitespace-only label, and duplicates
//! are collapsed keeping first-seen order. [`sanitize_tags`] enforces this
//! on every load and on every mutation; callers never need to pre-clean.
//!
//! ## Timestamps
//!
//! `last_edited` moves forward on every field-level mutation (`update`,
//! `set_category`, `toggle_archive`) and is never touched by reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display fallback for notes saved with an empty title.
pub const UNTITLED: &str = "Untitled Note";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub is_archived: bool,
    pub last_edited: DateTime<Utc>,
}

// Custom deserializer to handle legacy and seed data: a missing `id` is
// backfilled with a fresh UUID, missing fields default, and tags are
// sanitized so no whitespace-only label survives a load.
impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = NoteHelper::deserialize(deserializer)?;

        Ok(Note {
            id: helper.id.unwrap_or_else(Uuid::new_v4),
            title: helper.title,
            content: helper.content,
            tags: sanitize_tags(helper.tags),
            category: normalize_category(helper.category),
            is_archived: helper.is_archived,
            last_edited: helper.last_edited.unwrap_or_else(Utc::now),
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteHelper {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    is_archived: bool,
    #[serde(default)]
    last_edited: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(title: String, content: String, tags: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            tags: sanitize_tags(tags),
            category: None,
            is_archived: false,
            last_edited: Utc::now(),
        }
    }

    /// Overwrite title, content and tags. Does not touch `id`, the archive
    /// flag or the category; those have their own edit paths.
    pub fn update(&mut self, title: String, content: String, tags: Vec<String>) {
        self.title = title;
        self.content = content;
        self.tags = sanitize_tags(tags);
        self.last_edited = Utc::now();
    }

    /// Assign or clear the single category label. Empty input clears.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = normalize_category(category);
        self.last_edited = Utc::now();
    }

    pub fn toggle_archive(&mut self) {
        self.is_archived = !self.is_archived;
        self.last_edited = Utc::now();
    }

    /// Title for display, falling back for empty titles.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }
}

/// Trim every label, drop empties, collapse duplicates keeping first-seen
/// order.
pub fn sanitize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !seen.iter().any(|t| t == trimmed) {
            seen.push(trimmed.to_string());
        }
    }
    seen
}

fn normalize_category(category: Option<String>) -> Option<String> {
    category.and_then(|c| {
        let trimmed = c.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
