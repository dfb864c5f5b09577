use crate::commands::{CmdResult, NoteView};
use crate::error::Result;
use crate::graph::neighbors;
use crate::model::DisplayNote;
use crate::store::StorageBackend;

use super::helpers::resolve_note;

/// A note and the notes it links to, in link order.
pub fn run<B: StorageBackend>(backend: &B, input: &str) -> Result<CmdResult> {
    let notes = backend.load_notes()?;
    let index = backend.load_short_index()?;
    let links = backend.load_links()?;

    let id = resolve_note(input, &notes, &index)?;
    let note = DisplayNote::lookup(&id, &notes);
    let linked = neighbors(&links, &id)
        .iter()
        .map(|target| DisplayNote::lookup(target, &notes))
        .collect();

    let mut result = CmdResult::default();
    result.viewed = Some(NoteView { note, linked });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MISSING_CONTENT;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_note_with_links() {
        let fixture = StoreFixture::new()
            .with_note("20240101120000", "A")
            .with_note("20240101120001", "B")
            .with_link("20240101120000", "20240101120001");

        let view = run(&fixture.backend, "74486").unwrap().viewed.unwrap();
        assert_eq!(view.note.content, "A");
        assert_eq!(view.linked.len(), 1);
        assert_eq!(view.linked[0].line(), "[02697] B");
    }

    #[test]
    fn dangling_link_uses_placeholder() {
        let fixture = StoreFixture::new()
            .with_note("20240101120000", "A")
            .with_link("20240101120000", "20240101120009");

        let view = run(&fixture.backend, "74486").unwrap().viewed.unwrap();
        assert_eq!(view.linked[0].content, MISSING_CONTENT);
    }

    #[test]
    fn note_without_links_has_empty_list() {
        let fixture = StoreFixture::new().with_note("20240101120000", "A");
        let view = run(&fixture.backend, "74486").unwrap().viewed.unwrap();
        assert!(view.linked.is_empty());
    }
}
