use crate::index::Collision;
use crate::model::DisplayNote;
use std::path::PathBuf;

pub mod add;
pub mod delete;
pub mod export;
pub mod get;
pub mod helpers;
pub mod init;
pub mod link;
pub mod list;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What an export did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, count: usize },
    /// There was nothing to export, and no file was written.
    Empty,
}

/// A note together with the notes it links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub note: DisplayNote,
    pub linked: Vec<DisplayNote>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<DisplayNote>,
    pub listed_notes: Vec<DisplayNote>,
    pub viewed: Option<NoteView>,
    pub export: Option<ExportOutcome>,
    pub collisions: Vec<Collision>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    /// Records short id collisions and surfaces each one as a warning.
    pub fn add_collisions(&mut self, collisions: Vec<Collision>) {
        for collision in &collisions {
            self.add_message(CmdMessage::warning(format!("Warning: {}", collision)));
        }
        self.collisions.extend(collisions);
    }
}
