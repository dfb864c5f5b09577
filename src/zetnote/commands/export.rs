use crate::commands::{CmdMessage, CmdResult, ExportOutcome};
use crate::error::Result;
use crate::graph::reachable_closure;
use crate::index::short_id;
use crate::model::{DisplayNote, LongId, Notes};
use crate::store::StorageBackend;
use chrono::{DateTime, Local, TimeZone};

use super::helpers::resolve_note;

pub fn all<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    all_at(backend, &Local::now())
}

/// Exports every note to `export_<YYYYMMDD>.txt` for the day of `now`.
pub fn all_at<B, Tz>(backend: &B, now: &DateTime<Tz>) -> Result<CmdResult>
where
    B: StorageBackend,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let notes = backend.load_notes()?;
    let mut result = CmdResult::default();

    if notes.is_empty() {
        result.add_message(CmdMessage::info("No notes to export."));
        result.export = Some(ExportOutcome::Empty);
        return Ok(result);
    }

    let file_name = now.format("export_%Y%m%d.txt").to_string();
    let path = backend.write_export(&file_name, &render(notes.keys(), &notes))?;

    result.add_message(CmdMessage::success(format!(
        "Exported {} notes to {}",
        notes.len(),
        path.display()
    )));
    result.export = Some(ExportOutcome::Written {
        path,
        count: notes.len(),
    });
    Ok(result)
}

/// Exports a note and every note reachable from it to `related_<short_id>.txt`.
pub fn related<B: StorageBackend>(backend: &B, input: &str) -> Result<CmdResult> {
    let notes = backend.load_notes()?;
    let index = backend.load_short_index()?;
    let links = backend.load_links()?;

    let root = resolve_note(input, &notes, &index)?;
    let closure = reachable_closure(&links, &root);

    let file_name = format!("related_{}.txt", short_id(&root));
    let path = backend.write_export(&file_name, &render(closure.iter(), &notes))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} and {} related notes to {}",
        short_id(&root),
        closure.len() - 1,
        path.display()
    )));
    result.export = Some(ExportOutcome::Written {
        path,
        count: closure.len(),
    });
    Ok(result)
}

/// One `[short_id] content` line per id. Callers pass ids in ascending order.
fn render<'a>(ids: impl Iterator<Item = &'a LongId>, notes: &Notes) -> String {
    ids.map(|id| format!("{}\n", DisplayNote::lookup(id, notes).line()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, link};
    use crate::error::ZetError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::MemBackend;
    use chrono::Utc;

    #[test]
    fn empty_store_writes_nothing() {
        let backend = MemBackend::new();
        let result = all(&backend).unwrap();
        assert_eq!(result.export, Some(ExportOutcome::Empty));
        assert!(backend.export_names().is_empty());
    }

    #[test]
    fn exports_all_sorted_with_day_file_name() {
        let fixture = StoreFixture::new()
            .with_note("20240101120001", "B")
            .with_note("20240101120000", "A");
        let now = Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 0).unwrap();

        let result = all_at(&fixture.backend, &now).unwrap();
        assert!(matches!(
            result.export,
            Some(ExportOutcome::Written { count: 2, .. })
        ));
        assert_eq!(
            fixture.backend.export("export_20240630.txt").unwrap(),
            "[74486] A\n[02697] B\n"
        );
    }

    #[test]
    fn same_day_export_overwrites() {
        let fixture = StoreFixture::new().with_note("20240101120000", "A");
        let morning = Utc.with_ymd_and_hms(2024, 6, 30, 8, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 6, 30, 20, 0, 0).unwrap();

        all_at(&fixture.backend, &morning).unwrap();
        let fixture = fixture.with_note("20240101120001", "B");
        all_at(&fixture.backend, &evening).unwrap();

        assert_eq!(fixture.backend.export_names(), vec!["export_20240630.txt"]);
        assert_eq!(
            fixture.backend.export("export_20240630.txt").unwrap().lines().count(),
            2
        );
    }

    #[test]
    fn related_export_contains_linked_pair_once() {
        let backend = MemBackend::new();
        let a = add::run(&backend, "A".into()).unwrap().affected_notes[0].clone();
        let b = add::run(&backend, "B".into()).unwrap().affected_notes[0].clone();
        link::run(&backend, a.short_id.as_str(), b.short_id.as_str()).unwrap();

        let result = related(&backend, a.short_id.as_str()).unwrap();
        assert!(matches!(
            result.export,
            Some(ExportOutcome::Written { count: 2, .. })
        ));

        let file_name = format!("related_{}.txt", a.short_id);
        let contents = backend.export(&file_name).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec![a.line(), b.line()]);
    }

    #[test]
    fn related_export_follows_links_transitively() {
        let fixture = StoreFixture::new()
            .with_note("20240101120000", "A")
            .with_note("20240101120001", "B")
            .with_note("20240101120002", "C")
            .with_note("20240101120003", "unrelated")
            .with_link("20240101120000", "20240101120001")
            .with_link("20240101120001", "20240101120002")
            .with_link("20240101120003", "20240101120000");

        related(&fixture.backend, "74486").unwrap();
        assert_eq!(
            fixture.backend.export("related_74486.txt").unwrap(),
            "[74486] A\n[02697] B\n[18064] C\n"
        );
    }

    #[test]
    fn related_export_of_isolated_note_is_itself() {
        let fixture = StoreFixture::new()
            .with_note("20240101120000", "A")
            .with_note("20240101120001", "B");

        related(&fixture.backend, "74486").unwrap();
        assert_eq!(
            fixture.backend.export("related_74486.txt").unwrap(),
            "[74486] A\n"
        );
    }

    #[test]
    fn related_export_of_unknown_note_fails() {
        let fixture = StoreFixture::new().with_note("20240101120000", "A");
        let err = related(&fixture.backend, "1999").unwrap_err();
        assert!(matches!(err, ZetError::NotFound(_)));
        assert!(fixture.backend.export_names().is_empty());
    }
}
