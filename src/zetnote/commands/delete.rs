use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::graph::cascade_remove;
use crate::index::remove_from_short_index;
use crate::model::{DisplayNote, Note};
use crate::store::StorageBackend;

use super::helpers::resolve_note;

/// Deletes a note and everything that refers to it: its short index entry,
/// its outgoing links and every link pointing at it.
pub fn run<B: StorageBackend>(backend: &B, input: &str) -> Result<CmdResult> {
    let mut notes = backend.load_notes()?;
    let mut index = backend.load_short_index()?;
    let mut links = backend.load_links()?;

    let id = resolve_note(input, &notes, &index)?;
    let content = notes.remove(&id).unwrap_or_default();
    remove_from_short_index(&mut index, &notes, &id);
    cascade_remove(&mut links, &id);

    backend.save_notes(&notes)?;
    backend.save_short_index(&index)?;
    backend.save_links(&links)?;

    let note = DisplayNote::from_note(&Note::new(id, content));
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note deleted: {}", note.id)));
    Ok(result.with_affected_notes(vec![note]))
}
