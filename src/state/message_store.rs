//! Recent-activity log and deduplicated signature index.
//!
//! Two containers fed by the same `record` call:
//! - [`RecentLog`]: ring buffer of the last [`RECENT_CAPACITY`] entries
//! - [`UniqueIndex`]: every distinct `(code, param_a)` seen, first writer wins

use crate::model::{Category, Event, LiveEntry, SignatureKey};
use std::collections::{HashMap, VecDeque};

#[cfg(test)]
#[path = "message_store_tests.rs"]
mod tests;

/// Number of entries the recent-activity log retains.
pub const RECENT_CAPACITY: usize = 10;

/// Rolling window of the most recent entries (oldest at front, newest at back).
#[derive(Debug, Clone, Default)]
pub struct RecentLog {
    entries: VecDeque<LiveEntry>,
}

impl RecentLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(RECENT_CAPACITY),
        }
    }

    /// Append an entry, evicting the oldest one when at capacity.
    pub fn push(&mut self, entry: LiveEntry) {
        if self.entries.len() >= RECENT_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Number of retained entries (never more than [`RECENT_CAPACITY`]).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &LiveEntry> {
        self.entries.iter()
    }
}

/// One distinct event shape in the [`UniqueIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueEntry {
    /// Signature the entry is stored under.
    pub key: SignatureKey,
    /// Entry formatted from the first event with this signature.
    pub entry: LiveEntry,
    /// Category of that first event.
    pub category: Category,
}

/// Insertion-ordered, append-only index of distinct signatures.
///
/// Entries are never replaced or removed for the lifetime of the window.
#[derive(Debug, Clone, Default)]
pub struct UniqueIndex {
    entries: Vec<UniqueEntry>,
    positions: HashMap<SignatureKey, usize>,
}

impl UniqueIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry` under `key` unless the key is already present.
    ///
    /// Returns `true` when the entry was inserted.
    pub fn insert_first(
        &mut self,
        key: SignatureKey,
        entry: LiveEntry,
        category: Category,
    ) -> bool {
        if self.positions.contains_key(&key) {
            return false;
        }
        self.positions.insert(key, self.entries.len());
        self.entries.push(UniqueEntry {
            key,
            entry,
            category,
        });
        true
    }

    /// Look up the stored entry for a signature.
    pub fn get(&self, key: &SignatureKey) -> Option<&UniqueEntry> {
        self.positions.get(key).map(|&idx| &self.entries[idx])
    }

    /// Number of distinct signatures seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no signature has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &UniqueEntry> {
        self.entries.iter()
    }
}

/// Read-only view of both containers, taken for one render.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Recent-activity log.
    pub recent: &'a RecentLog,
    /// Deduplicated signature index.
    pub unique: &'a UniqueIndex,
}

/// Owner of the recent log and the unique index.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    recent: RecentLog,
    unique: UniqueIndex,
}

impl MessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            recent: RecentLog::new(),
            unique: UniqueIndex::new(),
        }
    }

    /// Record one event into both containers. Always succeeds.
    pub fn record(&mut self, event: Event) {
        let entry = LiveEntry::from_event(event);
        self.recent.push(entry.clone());
        self.unique
            .insert_first(event.signature(), entry, event.category());
    }

    /// Read-only access for rendering.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            recent: &self.recent,
            unique: &self.unique,
        }
    }

    /// Recent-activity log.
    pub fn recent(&self) -> &RecentLog {
        &self.recent
    }

    /// Deduplicated signature index.
    pub fn unique(&self) -> &UniqueIndex {
        &self.unique
    }
}
