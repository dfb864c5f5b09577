//! # Storage Layer
//!
//! zetnote keeps its state in three independent JSON documents, always read
//! and written whole:
//!
//! ```text
//! zetnote_data/
//! ├── notes.json      # { long_id: content }
//! ├── links.json      # { long_id: [long_id, ...] }
//! ├── shortmap.json   # { short_id: long_id }, rebuilt at every startup
//! ├── config.json     # optional file name overrides
//! └── exports/        # export_<YYYYMMDD>.txt, related_<short_id>.txt
//! ```
//!
//! The [`StorageBackend`] trait handles the "how" of storage. Commands load
//! the documents they need, mutate them in memory and save them back.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: production, file based. Documents are written to a
//!   temporary file and renamed into place.
//! - [`memory::MemBackend`]: in-memory, for tests.
//!
//! ## Limitations
//!
//! There is no locking and no transaction spanning the three documents. Two
//! processes writing at once race, and the last writer wins.

use crate::error::Result;
use crate::model::{Links, Notes, ShortIndex};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Whole-document access to the zetnote data set.
pub trait StorageBackend {
    /// Create the data directory and empty notes/links documents if missing.
    fn ensure_documents(&self) -> Result<()>;

    /// Load the notes document. A missing document is empty.
    fn load_notes(&self) -> Result<Notes>;

    fn save_notes(&self, notes: &Notes) -> Result<()>;

    /// Load the links document. A missing document is empty.
    fn load_links(&self) -> Result<Links>;

    fn save_links(&self, links: &Links) -> Result<()>;

    /// Load the short index document. A missing document is empty.
    fn load_short_index(&self) -> Result<ShortIndex>;

    fn save_short_index(&self, index: &ShortIndex) -> Result<()>;

    /// Write an export file, replacing any previous file with the same name.
    /// Returns the location it was written to.
    fn write_export(&self, file_name: &str, contents: &str) -> Result<PathBuf>;

    /// Where the data lives, for display.
    fn data_dir(&self) -> PathBuf;
}
