//! # API Facade
//!
//! The single entry point for zetnote operations, whatever the front end
//! (one-shot CLI, the interactive REPL, tests).
//!
//! The facade dispatches to `commands/*.rs` and returns structured results:
//! failures are [`ZetError`](crate::error::ZetError) variants
//! (`NotFound`, `Ambiguous`, ...), everything else is a [`CmdResult`]
//! carrying notes, collisions, the export outcome and user-facing messages.
//! It never prints.
//!
//! `ZetApi<B: StorageBackend>` is generic over storage:
//! - Production: `ZetApi<FsBackend>`
//! - Testing: `ZetApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::graph;
use crate::model::{LongId, Note};
use crate::store::StorageBackend;
use std::collections::BTreeSet;
use std::path::PathBuf;

pub struct ZetApi<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> ZetApi<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Creates missing documents and rebuilds the short index. Run once per
    /// process before anything else.
    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.backend)
    }

    pub fn add_note(&self, content: String) -> Result<CmdResult> {
        commands::add::run(&self.backend, content)
    }

    pub fn delete_note(&self, input: &str) -> Result<CmdResult> {
        commands::delete::run(&self.backend, input)
    }

    pub fn get_note(&self, input: &str) -> Result<Note> {
        commands::get::run(&self.backend, input)
    }

    pub fn list_all(&self) -> Result<Vec<Note>> {
        commands::list::list_all(&self.backend)
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::list::run(&self.backend)
    }

    pub fn show_note(&self, input: &str) -> Result<CmdResult> {
        commands::show::run(&self.backend, input)
    }

    pub fn link_notes(&self, from: &str, to: &str) -> Result<CmdResult> {
        commands::link::run(&self.backend, from, to)
    }

    pub fn neighbors(&self, input: &str) -> Result<Vec<LongId>> {
        let id = commands::get::resolve(&self.backend, input)?;
        Ok(graph::neighbors(&self.backend.load_links()?, &id))
    }

    pub fn reachable_closure(&self, input: &str) -> Result<BTreeSet<LongId>> {
        let id = commands::get::resolve(&self.backend, input)?;
        Ok(graph::reachable_closure(&self.backend.load_links()?, &id))
    }

    pub fn export_all(&self) -> Result<CmdResult> {
        commands::export::all(&self.backend)
    }

    pub fn export_related(&self, input: &str) -> Result<CmdResult> {
        commands::export::related(&self.backend, input)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.backend.data_dir()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, ExportOutcome, MessageLevel, NoteView};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZetError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::MemBackend;

    fn api() -> ZetApi<MemBackend> {
        let fixture = StoreFixture::new()
            .with_note("20240101120000", "A")
            .with_note("20240101120001", "B")
            .with_note("20240101120002", "C")
            .with_link("20240101120000", "20240101120001")
            .with_link("20240101120001", "20240101120002");
        ZetApi::new(fixture.backend)
    }

    #[test]
    fn neighbors_are_one_hop() {
        let api = api();
        assert_eq!(
            api.neighbors("74486").unwrap(),
            vec![LongId::from("20240101120001")]
        );
        assert!(api.neighbors("18064").unwrap().is_empty());
    }

    #[test]
    fn closure_is_transitive_and_includes_root() {
        let api = api();
        let closure = api.reachable_closure("74486").unwrap();
        assert_eq!(closure.len(), 3);
        assert!(closure.contains(&LongId::from("20240101120000")));

        let leaf = api.reachable_closure("18064").unwrap();
        assert_eq!(leaf, BTreeSet::from([LongId::from("20240101120002")]));
    }

    #[test]
    fn init_then_add_then_list() {
        let api = ZetApi::new(MemBackend::new());
        api.init().unwrap();
        api.add_note("Hello".into()).unwrap();

        let notes = api.list_all().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].content, "Hello");
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let api = api();
        api.delete_note("02697").unwrap();
        assert!(matches!(api.get_note("02697"), Err(ZetError::NotFound(_))));
        assert!(api.neighbors("74486").unwrap().is_empty());
    }
}
