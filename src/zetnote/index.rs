//! # The Dual Id System
//!
//! Every note has a canonical [`LongId`], its creation timestamp
//! (`YYYYMMDDHHMMSS`). Those are stable and sort in creation order, but they
//! are tedious to type, so each one also gets a five digit [`ShortId`]
//! derived from it by hashing.
//!
//! Short ids are a convenience, not an identity:
//!
//! - They are computed with FNV-1a, so the same long id yields the same short
//!   id in every process on every platform.
//! - They can collide. The [`ShortIndex`] is last-write-wins, and every
//!   collision is surfaced as a [`Collision`] so the caller can warn about it.
//!   A note that lost its short id is still reachable through a prefix of its
//!   long id.
//!
//! ## Resolution
//!
//! User input goes through [`resolve`]:
//!
//! 1. An exact short id hit in the index wins.
//! 2. Then an exact long id. `20240101120000` must resolve even when
//!    `20240101120000-001` exists.
//! 3. Otherwise the input is treated as a long id prefix. Exactly one match
//!    resolves; none is [`Resolution::NotFound`], several are
//!    [`Resolution::Ambiguous`].
//!
//! ## Maintenance
//!
//! The index is a derived cache. [`rebuild_short_index`] regenerates it from
//! the notes at startup, iterating in ascending long id order so the newest
//! note owns a contested short id. [`update_short_index`] upserts a single
//! entry when a note is created. [`remove_from_short_index`] hands a deleted
//! note's short id to the newest remaining note that shares it, so the index
//! stays what a rebuild would produce.

use crate::model::{LongId, Notes, ShortId, ShortIndex};
use chrono::{DateTime, TimeDelta, TimeZone};
use tracing::{debug, warn};

const SHORT_ID_MODULUS: u64 = 100_000;
const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;
const MAX_SUFFIX: usize = 999;

pub const LONG_ID_FORMAT: &str = "%Y%m%d%H%M%S";

/// Two different long ids hashed to the same short id.
///
/// `current` now owns `short_id` in the index; `previous` lost it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub short_id: ShortId,
    pub previous: LongId,
    pub current: LongId,
}

impl std::fmt::Display for Collision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Short id {} collides ({} and {}); it now points to {}",
            self.short_id, self.previous, self.current, self.current
        )
    }
}

/// Outcome of resolving user input to a note id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(LongId),
    NotFound,
    Ambiguous(Vec<LongId>),
}

/// Generates the id for a note created at `now`.
///
/// The base id has second granularity. If it is already taken, a counter
/// suffix (`-001`, `-002`, ...) is appended until the id is free. Once all
/// 999 suffixes of a second are taken the id moves on to the next second, so
/// ids keep sorting in creation order.
pub fn generate_id<Tz: TimeZone>(now: &DateTime<Tz>, existing: &Notes) -> LongId
where
    Tz::Offset: std::fmt::Display,
{
    let mut second = now.clone();
    loop {
        let base = second.format(LONG_ID_FORMAT).to_string();
        if let Some(id) = free_id(&base, existing) {
            return id;
        }
        second = second + TimeDelta::seconds(1);
    }
}

fn free_id(base: &str, existing: &Notes) -> Option<LongId> {
    std::iter::once(LongId::new(base))
        .chain((1..=MAX_SUFFIX).map(|n| LongId::new(format!("{}-{:03}", base, n))))
        .find(|id| !existing.contains_key(id))
}

fn stable_hash_64(input: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Derives the five digit short id for a long id.
pub fn short_id(long_id: &LongId) -> ShortId {
    let n = stable_hash_64(long_id.as_str()) % SHORT_ID_MODULUS;
    ShortId::new(format!("{:05}", n))
}

/// Resolves a short id or a long id prefix against the current documents.
pub fn resolve(input: &str, notes: &Notes, short_index: &ShortIndex) -> Resolution {
    if let Some(id) = short_index.get(&ShortId::new(input)) {
        return Resolution::Found(id.clone());
    }

    if input.is_empty() {
        return Resolution::NotFound;
    }

    let exact = LongId::new(input);
    if notes.contains_key(&exact) {
        return Resolution::Found(exact);
    }

    let mut matches: Vec<LongId> = notes
        .keys()
        .filter(|id| id.as_str().starts_with(input))
        .cloned()
        .collect();

    match matches.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Found(matches.remove(0)),
        _ => Resolution::Ambiguous(matches),
    }
}

/// Regenerates the short index from scratch.
pub fn rebuild_short_index(notes: &Notes) -> (ShortIndex, Vec<Collision>) {
    let mut index = ShortIndex::new();
    let mut collisions = Vec::new();

    for id in notes.keys() {
        if let Some(collision) = update_short_index(&mut index, id) {
            collisions.push(collision);
        }
    }

    (index, collisions)
}

/// Points the short id of `long_id` at it, reporting the note it displaced.
pub fn update_short_index(index: &mut ShortIndex, long_id: &LongId) -> Option<Collision> {
    let sid = short_id(long_id);
    let previous = index.insert(sid.clone(), long_id.clone())?;
    if &previous == long_id {
        return None;
    }

    warn!(short_id = %sid, previous = %previous, current = %long_id, "short id collision");
    Some(Collision {
        short_id: sid,
        previous,
        current: long_id.clone(),
    })
}

/// Releases the short id of a deleted note, but only if it still owns it.
///
/// The newest note left in `notes` with the same short id takes the entry
/// over; otherwise the entry is dropped.
pub fn remove_from_short_index(index: &mut ShortIndex, notes: &Notes, long_id: &LongId) -> bool {
    let sid = short_id(long_id);
    if index.get(&sid) != Some(long_id) {
        return false;
    }

    let survivor = notes
        .keys()
        .rev()
        .find(|id| *id != long_id && short_id(id) == sid);
    match survivor {
        Some(id) => {
            debug!(short_id = %sid, current = %id, "short id handed to remaining note");
            index.insert(sid, id.clone());
        }
        None => {
            index.remove(&sid);
        }
    }
    true
}
