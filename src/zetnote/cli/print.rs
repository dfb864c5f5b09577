use colored::Colorize;
use zetnote::api::{CmdMessage, MessageLevel, NoteView};
use zetnote::error::ZetError;
use zetnote::index::short_id;
use zetnote::model::DisplayNote;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn format_note(note: &DisplayNote) -> String {
    format!("{} {}", format!("[{}]", note.short_id).yellow(), note.content)
}

pub(super) fn print_notes(notes: &[DisplayNote]) {
    for note in notes {
        println!("{}", format_note(note));
    }
}

pub(super) fn print_note_view(view: &NoteView) {
    println!("{}", format_note(&view.note));
    println!();
    if view.linked.is_empty() {
        println!("{}", "No links.".dimmed());
        return;
    }
    println!("Linked notes:");
    for note in &view.linked {
        println!("  - {}", format_note(note));
    }
}

pub fn print_error(err: &ZetError) {
    eprintln!("{} {}", "Error:".red(), err);
    if let ZetError::Ambiguous { candidates, .. } = err {
        for id in candidates {
            eprintln!("  {} [{}]", id, short_id(id));
        }
    }
}
