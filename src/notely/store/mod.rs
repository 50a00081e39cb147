//! # Storage Layer
//!
//! The storage abstraction for notely. The [`NoteStore`] trait models the
//! persistence medium as a single named slot holding the serialized note
//! collection, plus a read-only seed document consulted on first run.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing repository logic
//! - Keep the repository's seeding/backfill rules **decoupled** from where
//!   the bytes live
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Collection slot in `notes.json`
//!   - Optional seed document (`{ "notes": [...] }`) read once on first run
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! The trait deliberately deals in raw strings: parsing, seeding decisions
//! and id backfill belong to the [`Repository`](crate::repository::Repository),
//! which is the only component allowed to interpret the slot's contents.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for the persisted note collection.
pub trait NoteStore {
    /// Read the raw contents of the collection slot. `None` if no slot has
    /// ever been written.
    fn read_slot(&self) -> Result<Option<String>>;

    /// Overwrite the collection slot with the full serialized collection.
    /// No partial write may be observable by a subsequent read.
    fn write_slot(&mut self, raw: &str) -> Result<()>;

    /// Read the bundled seed document, if one is available.
    fn read_seed(&self) -> Result<Option<String>>;
}
