use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::rebuild_short_index;
use crate::store::StorageBackend;
use tracing::debug;

/// Startup: make sure the documents exist and regenerate the short index
/// from the notes, discarding whatever was stored before.
pub fn run<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    backend.ensure_documents()?;

    let notes = backend.load_notes()?;
    let (index, collisions) = rebuild_short_index(&notes);
    backend.save_short_index(&index)?;
    debug!(notes = notes.len(), entries = index.len(), "short index rebuilt");

    let mut result = CmdResult::default();
    result.add_collisions(collisions);
    Ok(result)
}
