use super::NoteStore;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data across processes.
#[derive(Default)]
pub struct InMemoryStore {
    slot: Option<String>,
    seed: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the seed document, mimicking a bundled data file.
    pub fn with_seed(mut self, seed: &str) -> Self {
        self.seed = Some(seed.to_string());
        self
    }

    /// Pre-populate the slot, mimicking an existing installation.
    pub fn with_slot(mut self, raw: &str) -> Self {
        self.slot = Some(raw.to_string());
        self
    }

    /// Raw slot contents, for asserting on what was persisted.
    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl NoteStore for InMemoryStore {
    fn read_slot(&self) -> Result<Option<String>> {
        Ok(self.slot.clone())
    }

    fn write_slot(&mut self, raw: &str) -> Result<()> {
        self.slot = Some(raw.to_string());
        Ok(())
    }

    fn read_seed(&self) -> Result<Option<String>> {
        Ok(self.seed.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Note;
    use crate::repository::Repository;

    /// Builder for a loaded repository backed by an in-memory store.
    pub struct RepoFixture {
        notes: Vec<Note>,
    }

    impl Default for RepoFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RepoFixture {
        pub fn new() -> Self {
            Self { notes: Vec::new() }
        }

        pub fn with_note(mut self, title: &str, content: &str, tags: &[&str]) -> Self {
            let note = Note::new(
                title.to_string(),
                content.to_string(),
                tags.iter().map(|t| t.to_string()).collect(),
            );
            self.notes.push(note);
            self
        }

        pub fn with_archived_note(mut self, title: &str, tags: &[&str]) -> Self {
            let mut note = Note::new(
                title.to_string(),
                String::new(),
                tags.iter().map(|t| t.to_string()).collect(),
            );
            note.is_archived = true;
            self.notes.push(note);
            self
        }

        pub fn with_categorized_note(mut self, title: &str, category: &str) -> Self {
            let mut note = Note::new(title.to_string(), String::new(), Vec::new());
            note.category = Some(category.to_string());
            self.notes.push(note);
            self
        }

        pub fn build(self) -> Repository<InMemoryStore> {
            let raw = serde_json::to_string(&self.notes).expect("fixture serializes");
            let mut repo = Repository::new(InMemoryStore::new().with_slot(&raw));
            repo.load().expect("fixture loads");
            repo
        }
    }
}
