//! # Repository: the canonical note collection
//!
//! The [`Repository`] is the single owner of the in-memory collection.
//! Every other component sees read-only `&[Note]` projections; every
//! mutation goes through an id-addressed method here and flushes the full
//! collection to the store before returning. There is no delta persistence
//! and no second authoritative copy anywhere.
//!
//! ## Load and seeding
//!
//! `load()` resolves the starting collection in this order:
//!
//! 1. A slot that parses (even to an empty array) wins. An empty array is
//!    an explicit empty-state left behind by a real save, so it is never
//!    re-seeded.
//! 2. An absent or unparseable slot falls back to the bundled seed
//!    document (`{ "notes": [...] }`).
//! 3. An absent or unparseable seed yields an empty collection.
//!
//! Records missing an id are backfilled and tags sanitized during parsing,
//! and the result is re-persisted immediately, so a second `load()` with no
//! intervening mutation returns the identical id set. Corruption is logged
//! and degraded, never surfaced as an error; the app stays usable with
//! zero notes.

use crate::error::{NotelyError, Result};
use crate::model::Note;
use crate::store::NoteStore;
use log::warn;
use serde::Deserialize;
use uuid::Uuid;

/// Shape of the bundled seed document.
#[derive(Deserialize)]
struct SeedFile {
    notes: Vec<Note>,
}

pub struct Repository<S: NoteStore> {
    store: S,
    notes: Vec<Note>,
}

impl<S: NoteStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            notes: Vec::new(),
        }
    }

    /// Load the collection from the store, seeding on first run and
    /// backfilling ids, then re-persist so subsequent loads are idempotent.
    pub fn load(&mut self) -> Result<()> {
        self.notes = match self.store.read_slot()? {
            Some(raw) => match serde_json::from_str::<Vec<Note>>(&raw) {
                Ok(notes) => notes,
                Err(e) => {
                    warn!("persisted notes are corrupted, falling back to seed: {}", e);
                    self.load_seed()?
                }
            },
            None => self.load_seed()?,
        };

        self.save()
    }

    fn load_seed(&self) -> Result<Vec<Note>> {
        let Some(raw) = self.store.read_seed()? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<SeedFile>(&raw) {
            Ok(seed) => Ok(seed.notes),
            Err(e) => {
                warn!("seed document unreadable, starting empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Read-only projection of the canonical collection, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn find(&self, id: Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Create a note at the front of the collection and persist.
    pub fn create(&mut self, title: String, content: String, tags: Vec<String>) -> Result<Uuid> {
        let note = Note::new(title, content, tags);
        let id = note.id;
        self.notes.insert(0, note);
        self.save()?;
        Ok(id)
    }

    /// Overwrite a note's title, content and tags and persist.
    pub fn update(
        &mut self,
        id: Uuid,
        title: String,
        content: String,
        tags: Vec<String>,
    ) -> Result<()> {
        self.mutate(id, |note| note.update(title, content, tags))
    }

    /// Assign or clear a note's category and persist.
    pub fn set_category(&mut self, id: Uuid, category: Option<String>) -> Result<()> {
        self.mutate(id, |note| note.set_category(category))
    }

    /// Flip a note's archive flag and persist.
    pub fn toggle_archive(&mut self, id: Uuid) -> Result<()> {
        self.mutate(id, |note| note.toggle_archive())
    }

    /// Remove a note permanently and persist. There is no soft-delete;
    /// archiving is the only reversible removal.
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return Err(NotelyError::NoteNotFound(id));
        }
        self.save()
    }

    fn mutate<F: FnOnce(&mut Note)>(&mut self, id: Uuid, f: F) -> Result<()> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(NotelyError::NoteNotFound(id))?;
        f(note);
        self.save()
    }

    fn save(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.notes).map_err(NotelyError::Serialization)?;
        self.store.write_slot(&raw)
    }

    /// Serialize the full collection to pretty-printed JSON for download.
    pub fn export_all(&self) -> Result<Vec<u8>> {
        let bytes = serde_json::to_vec_pretty(&self.notes).map_err(NotelyError::Serialization)?;
        Ok(bytes)
    }

    /// Parse an externally supplied backup and append every record to the
    /// collection. Strictly additive: no de-duplication by id, title or
    /// content, so re-importing the same backup creates duplicates (the
    /// caller is expected to tell the user so). Anything that is not a JSON
    /// array of note records is rejected and the collection left untouched.
    pub fn import_merge(&mut self, raw: &[u8]) -> Result<usize> {
        let text = std::str::from_utf8(raw)
            .map_err(|e| NotelyError::MalformedImport(format!("not UTF-8 text: {}", e)))?;
        let imported: Vec<Note> = serde_json::from_str(text)
            .map_err(|e| NotelyError::MalformedImport(format!("expected an array of notes: {}", e)))?;

        let count = imported.len();
        self.notes.extend(imported);
        self.save()?;
        Ok(count)
    }
}
