use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical note identifier: the creation time as `YYYYMMDDHHMMSS`, with a
/// `-NNN` suffix when several notes are created within the same second.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LongId(String);

impl LongId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LongId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Five digit, human-typable alias of a [`LongId`]. Not unique.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortId(String);

impl ShortId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The notes document: id -> content.
pub type Notes = BTreeMap<LongId, String>;

/// The links document: id -> outgoing link targets, in insertion order.
pub type Links = BTreeMap<LongId, Vec<LongId>>;

/// The short index document: short id -> owning long id.
pub type ShortIndex = BTreeMap<ShortId, LongId>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: LongId,
    pub content: String,
}

impl Note {
    pub fn new(id: LongId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    pub fn short_id(&self) -> ShortId {
        crate::index::short_id(&self.id)
    }
}

/// Placeholder shown for link targets whose note no longer exists.
pub const MISSING_CONTENT: &str = "---";

/// A note as presented to the user, paired with its short id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub short_id: ShortId,
    pub id: LongId,
    pub content: String,
}

impl DisplayNote {
    pub fn from_note(note: &Note) -> Self {
        Self {
            short_id: note.short_id(),
            id: note.id.clone(),
            content: note.content.clone(),
        }
    }

    /// Builds an entry for `id`, falling back to the placeholder when the note
    /// is gone (dangling link target).
    pub fn lookup(id: &LongId, notes: &Notes) -> Self {
        Self {
            short_id: crate::index::short_id(id),
            id: id.clone(),
            content: notes
                .get(id)
                .cloned()
                .unwrap_or_else(|| MISSING_CONTENT.to_string()),
        }
    }

    /// The `[short_id] content` line used by `list` and exports.
    pub fn line(&self) -> String {
        format!("[{}] {}", self.short_id, self.content)
    }
}
