use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{generate_id, update_short_index};
use crate::model::{DisplayNote, Note};
use crate::store::StorageBackend;
use chrono::{DateTime, Local, TimeZone};

pub fn run<B: StorageBackend>(backend: &B, content: String) -> Result<CmdResult> {
    run_at(backend, content, &Local::now())
}

/// Adds a note as if created at `now`.
pub fn run_at<B, Tz>(backend: &B, content: String, now: &DateTime<Tz>) -> Result<CmdResult>
where
    B: StorageBackend,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut notes = backend.load_notes()?;
    let id = generate_id(now, &notes);
    notes.insert(id.clone(), content.clone());
    backend.save_notes(&notes)?;

    let mut index = backend.load_short_index()?;
    let collision = update_short_index(&mut index, &id);
    backend.save_short_index(&index)?;

    let note = DisplayNote::from_note(&Note::new(id, content));
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note added: {} (short id: {})",
        note.id, note.short_id
    )));
    result.add_collisions(collision.into_iter().collect());
    result.add_message(CmdMessage::info(format!(
        "Data directory: {}",
        backend.data_dir().display()
    )));
    Ok(result.with_affected_notes(vec![note]))
}
