use crate::error::Result;
use crate::model::{LongId, Note};
use crate::store::StorageBackend;

use super::helpers::{resolve_id, resolve_note};

pub fn run<B: StorageBackend>(backend: &B, input: &str) -> Result<Note> {
    let notes = backend.load_notes()?;
    let index = backend.load_short_index()?;

    let id = resolve_note(input, &notes, &index)?;
    let content = notes.get(&id).cloned().unwrap_or_default();
    Ok(Note::new(id, content))
}

/// Resolves input to a long id without requiring the note to still exist.
pub fn resolve<B: StorageBackend>(backend: &B, input: &str) -> Result<LongId> {
    let notes = backend.load_notes()?;
    let index = backend.load_short_index()?;
    resolve_id(input, &notes, &index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZetError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn gets_by_short_id_and_prefix() {
        let fixture = StoreFixture::new()
            .with_note("20240101120000", "A")
            .with_note("20250101120000", "B");

        assert_eq!(run(&fixture.backend, "74486").unwrap().content, "A");
        assert_eq!(run(&fixture.backend, "2025").unwrap().content, "B");
    }

    #[test]
    fn missing_note_is_not_found() {
        let fixture = StoreFixture::new().with_note("20240101120000", "A");
        assert!(matches!(
            run(&fixture.backend, "2025"),
            Err(ZetError::NotFound(_))
        ));
    }
}
