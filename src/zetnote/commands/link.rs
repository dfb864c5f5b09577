use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::graph::add_edge;
use crate::index::short_id;
use crate::store::StorageBackend;

use super::helpers::resolve_id;

/// Links `from` to `to`. The link is directed: `to` does not link back.
pub fn run<B: StorageBackend>(backend: &B, from: &str, to: &str) -> Result<CmdResult> {
    let notes = backend.load_notes()?;
    let index = backend.load_short_index()?;

    let from_id = resolve_id(from, &notes, &index)?;
    let to_id = resolve_id(to, &notes, &index)?;

    let mut links = backend.load_links()?;
    let added = add_edge(&mut links, &from_id, &to_id);

    let mut result = CmdResult::default();
    let edge = format!("{} --> {}", short_id(&from_id), short_id(&to_id));
    if added {
        backend.save_links(&links)?;
        result.add_message(CmdMessage::success(format!("Linked {}", edge)));
    } else {
        result.add_message(CmdMessage::info(format!("Already linked {}", edge)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZetError;
    use crate::model::LongId;
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_note("20240101120000", "A")
            .with_note("20240101120001", "B")
    }

    #[test]
    fn links_are_directed() {
        let fixture = fixture();
        run(&fixture.backend, "74486", "02697").unwrap();

        let links = fixture.backend.load_links().unwrap();
        assert_eq!(
            links.get(&LongId::from("20240101120000")),
            Some(&vec![LongId::from("20240101120001")])
        );
        assert!(!links.contains_key(&LongId::from("20240101120001")));
    }

    #[test]
    fn linking_twice_keeps_one_edge() {
        let fixture = fixture();
        run(&fixture.backend, "74486", "02697").unwrap();
        let again = run(&fixture.backend, "74486", "02697").unwrap();
        assert!(again.messages[0].content.starts_with("Already linked"));

        let links = fixture.backend.load_links().unwrap();
        assert_eq!(links[&LongId::from("20240101120000")].len(), 1);
    }

    #[test]
    fn unresolvable_target_aborts_without_mutation() {
        let fixture = fixture();
        let err = run(&fixture.backend, "74486", "99").unwrap_err();
        assert!(matches!(err, ZetError::NotFound(ref s) if s == "99"));
        assert!(fixture.backend.load_links().unwrap().is_empty());
    }

    #[test]
    fn ambiguous_source_aborts_without_mutation() {
        let fixture = fixture();
        let err = run(&fixture.backend, "2024", "02697").unwrap_err();
        assert!(matches!(err, ZetError::Ambiguous { .. }));
        assert!(fixture.backend.load_links().unwrap().is_empty());
    }
}
