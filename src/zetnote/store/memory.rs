use super::StorageBackend;
use crate::error::{Result, ZetError};
use crate::model::{Links, Notes, ShortIndex};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` since zetnote is single-threaded, which lets the
/// `StorageBackend` trait take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    notes: RefCell<Notes>,
    links: RefCell<Links>,
    short_index: RefCell<ShortIndex>,
    exports: RefCell<BTreeMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Contents of a previously written export, by file name.
    pub fn export(&self, file_name: &str) -> Option<String> {
        self.exports.borrow().get(file_name).cloned()
    }

    pub fn export_names(&self) -> Vec<String> {
        self.exports.borrow().keys().cloned().collect()
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ZetError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn ensure_documents(&self) -> Result<()> {
        Ok(())
    }

    fn load_notes(&self) -> Result<Notes> {
        Ok(self.notes.borrow().clone())
    }

    fn save_notes(&self, notes: &Notes) -> Result<()> {
        self.check_writable()?;
        *self.notes.borrow_mut() = notes.clone();
        Ok(())
    }

    fn load_links(&self) -> Result<Links> {
        Ok(self.links.borrow().clone())
    }

    fn save_links(&self, links: &Links) -> Result<()> {
        self.check_writable()?;
        *self.links.borrow_mut() = links.clone();
        Ok(())
    }

    fn load_short_index(&self) -> Result<ShortIndex> {
        Ok(self.short_index.borrow().clone())
    }

    fn save_short_index(&self, index: &ShortIndex) -> Result<()> {
        self.check_writable()?;
        *self.short_index.borrow_mut() = index.clone();
        Ok(())
    }

    fn write_export(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        self.check_writable()?;
        self.exports
            .borrow_mut()
            .insert(file_name.to_string(), contents.to_string());
        Ok(PathBuf::from(format!("memory://exports/{}", file_name)))
    }

    fn data_dir(&self) -> PathBuf {
        PathBuf::from("memory://")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::index::rebuild_short_index;
    use crate::model::LongId;

    /// A backend pre-populated with notes whose ids are given explicitly,
    /// with the short index rebuilt as it would be at startup.
    pub struct StoreFixture {
        pub backend: MemBackend,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                backend: MemBackend::new(),
            }
        }

        pub fn with_note(self, id: &str, content: &str) -> Self {
            let mut notes = self.backend.load_notes().unwrap();
            notes.insert(LongId::from(id), content.to_string());
            self.backend.save_notes(&notes).unwrap();
            self.reindexed()
        }

        pub fn with_link(self, from: &str, to: &str) -> Self {
            let mut links = self.backend.load_links().unwrap();
            crate::graph::add_edge(&mut links, &LongId::from(from), &LongId::from(to));
            self.backend.save_links(&links).unwrap();
            self
        }

        fn reindexed(self) -> Self {
            let notes = self.backend.load_notes().unwrap();
            let (index, _) = rebuild_short_index(&notes);
            self.backend.save_short_index(&index).unwrap();
            self
        }
    }
}
