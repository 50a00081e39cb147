use super::NoteStore;
use crate::error::{NotelyError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SLOT_FILENAME: &str = "notes.json";

pub struct FileStore {
    data_dir: PathBuf,
    seed_path: Option<PathBuf>,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            seed_path: None,
        }
    }

    /// Point the store at a seed document consulted when the slot is empty.
    pub fn with_seed(mut self, path: PathBuf) -> Self {
        self.seed_path = Some(path);
        self
    }

    pub fn slot_path(&self) -> PathBuf {
        self.data_dir.join(SLOT_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(NotelyError::Io)?;
        }
        Ok(())
    }
}

impl NoteStore for FileStore {
    fn read_slot(&self) -> Result<Option<String>> {
        let path = self.slot_path();
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path).map_err(NotelyError::Io)?;
        Ok(Some(raw))
    }

    fn write_slot(&mut self, raw: &str) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;

        // Write to a sibling temp file and rename so a reader never
        // observes a torn slot.
        let path = self.slot_path();
        let tmp = self.data_dir.join(format!("{}.tmp", SLOT_FILENAME));
        fs::write(&tmp, raw).map_err(NotelyError::Io)?;
        fs::rename(&tmp, &path).map_err(NotelyError::Io)?;
        Ok(())
    }

    fn read_seed(&self) -> Result<Option<String>> {
        let Some(path) = &self.seed_path else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path).map_err(NotelyError::Io)?;
        Ok(Some(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_missing_slot_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.read_slot().unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));

        store.write_slot("[]").unwrap();
        assert_eq!(store.read_slot().unwrap().as_deref(), Some("[]"));

        store.write_slot(r#"[{"title":"x"}]"#).unwrap();
        assert_eq!(
            store.read_slot().unwrap().as_deref(),
            Some(r#"[{"title":"x"}]"#)
        );
    }

    #[test]
    fn write_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.write_slot("[]").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![SLOT_FILENAME.to_string()]);
    }

    #[test]
    fn seed_read_when_configured() {
        let dir = TempDir::new().unwrap();
        let seed = dir.path().join("seed.json");
        fs::write(&seed, r#"{"notes":[]}"#).unwrap();

        let store = FileStore::new(dir.path().join("data")).with_seed(seed);
        assert_eq!(
            store.read_seed().unwrap().as_deref(),
            Some(r#"{"notes":[]}"#)
        );
    }

    #[test]
    fn missing_seed_is_none_not_error() {
        let dir = TempDir::new().unwrap();
        let store =
            FileStore::new(dir.path().to_path_buf()).with_seed(dir.path().join("absent.json"));
        assert!(store.read_seed().unwrap().is_none());
    }
}
