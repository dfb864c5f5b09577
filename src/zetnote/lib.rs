//! # Zetnote Architecture
//!
//! Zetnote is a small Zettelkasten: short text notes with timestamp ids,
//! five digit short ids for typing, directed links between notes, and plain
//! text exports of a note together with everything it links to.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot subcommands and the interactive REPL            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns structured results    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load documents, apply index/graph logic, save documents  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait, whole-document JSON read/write     │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The id logic lives in [`index`] and the link graph in [`graph`]; both
//! are pure functions over in-memory documents and hold no I/O.
//!
//! ## Known limitations
//!
//! Every command is a read-modify-write of whole JSON files with no locking.
//! Running two zetnote processes against the same data directory at the same
//! time can lose writes.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Ids, notes and the document types
//! - [`index`]: Id generation, short ids and resolution
//! - [`graph`]: Link creation, traversal and cascade removal
//! - [`config`]: Data directory layout
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod graph;
pub mod index;
pub mod model;
pub mod store;
