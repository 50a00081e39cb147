//! # Notely Architecture
//!
//! Notely is a **UI-agnostic note-taking library**. The CLI binary that
//! ships with it is a client, nothing more: everything it does goes through
//! the library surface, and the same core could serve a TUI, a web view or
//! a sync daemon without touching this crate.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repository.rs)                                 │
//! │  - Owns THE in-memory collection; there is exactly one      │
//! │  - Load/seed/backfill, id-addressed mutations, export/import│
//! │  - Flushes the full collection on every mutation            │
//! └─────────────────────────────────────────────────────────────┘
//!            │                              │
//!            ▼                              ▼
//! ┌──────────────────────────┐  ┌───────────────────────────────┐
//! │  Projections             │  │  Storage Layer (store/)       │
//! │  - view.rs: section +    │  │  - NoteStore trait            │
//! │    search composition    │  │  - FileStore (production)     │
//! │  - facets.rs: tag and    │  │  - InMemoryStore (testing)    │
//! │    category indexes      │  └───────────────────────────────┘
//! │  - share.rs: token codec │
//! └──────────────────────────┘
//! ```
//!
//! ## Key Principle: one authoritative collection
//!
//! The [`repository::Repository`] owns the canonical `Vec<Note>`. Every
//! other component works on read-only `&[Note]` projections; mutation
//! requests carry a note id back to the repository. No caller ever holds a
//! second copy that could drift from what is persisted.
//!
//! ## Failure posture
//!
//! Nothing in the core is fatal. Corrupt persisted data degrades to the
//! seed document, an unavailable seed degrades to an empty collection, a
//! malformed import is rejected with the collection untouched, and a bad
//! share token falls back to normal operation. Failures worth knowing
//! about go through `log`.
//!
//! ## Module Overview
//!
//! - [`model`]: the [`model::Note`] record and its mutation rules
//! - [`repository`]: persistence contract, seeding, export/import
//! - [`store`]: storage abstraction and backends
//! - [`facets`]: unique tag/category derivation
//! - [`view`]: [`view::ViewMode`] and visible-list composition
//! - [`share`]: share-link token codec
//! - [`error`]: error types
//! - `cli`: argument parsing and printing for the binary (not part of the
//!   lib API)

pub mod error;
pub mod facets;
pub mod model;
pub mod repository;
pub mod share;
pub mod store;
pub mod view;
