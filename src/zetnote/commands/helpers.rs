use crate::error::{Result, ZetError};
use crate::index::{resolve, Resolution};
use crate::model::{LongId, Notes, ShortIndex};

/// Resolves user input to a long id, turning failed resolutions into errors.
pub fn resolve_id(input: &str, notes: &Notes, short_index: &ShortIndex) -> Result<LongId> {
    match resolve(input, notes, short_index) {
        Resolution::Found(id) => Ok(id),
        Resolution::NotFound => Err(ZetError::NotFound(input.to_string())),
        Resolution::Ambiguous(candidates) => Err(ZetError::Ambiguous {
            input: input.to_string(),
            candidates,
        }),
    }
}

/// Like [`resolve_id`], but also requires the note to exist. A stale short
/// index entry can point at a note that is gone.
pub fn resolve_note(input: &str, notes: &Notes, short_index: &ShortIndex) -> Result<LongId> {
    let id = resolve_id(input, notes, short_index)?;
    if !notes.contains_key(&id) {
        return Err(ZetError::NotFound(input.to_string()));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShortId;

    #[test]
    fn stale_short_index_entry_is_not_found() {
        let notes = Notes::new();
        let mut index = ShortIndex::new();
        index.insert(ShortId::new("74486"), LongId::from("20240101120000"));

        assert_eq!(
            resolve_id("74486", &notes, &index).unwrap().as_str(),
            "20240101120000"
        );
        assert!(matches!(
            resolve_note("74486", &notes, &index),
            Err(ZetError::NotFound(_))
        ));
    }

    #[test]
    fn ambiguous_error_lists_candidates() {
        let mut notes = Notes::new();
        notes.insert(LongId::from("20240101120000"), String::new());
        notes.insert(LongId::from("20240101120001"), String::new());

        match resolve_id("2024", &notes, &ShortIndex::new()) {
            Err(ZetError::Ambiguous { input, candidates }) => {
                assert_eq!(input, "2024");
                assert_eq!(candidates.len(), 2);
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }
}
