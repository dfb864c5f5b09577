use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{DisplayNote, Note};
use crate::store::StorageBackend;

/// All notes, oldest first (ascending long id).
pub fn list_all<B: StorageBackend>(backend: &B) -> Result<Vec<Note>> {
    Ok(backend
        .load_notes()?
        .into_iter()
        .map(|(id, content)| Note::new(id, content))
        .collect())
}

pub fn run<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    let listed: Vec<DisplayNote> = list_all(backend)?
        .iter()
        .map(DisplayNote::from_note)
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No notes yet."));
    }
    Ok(result.with_listed_notes(listed))
}
