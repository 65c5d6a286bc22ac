// Trash state - soft-deleted items and their retention countdown
use crate::model::{Document, Folder, Item, Section};
use chrono::{DateTime, Utc};

pub const DEFAULT_RETENTION_DAYS: u32 = 30;

/// An item removed from a section tree, with what is needed to put it back
#[derive(Clone, Debug, PartialEq)]
pub struct TrashEntry {
    pub item: Item,
    pub section: Section,
    /// Folder the item was removed from, `None` for a root folder
    pub parent_id: Option<String>,
    pub deleted_at: DateTime<Utc>,
}

impl TrashEntry {
    pub fn id(&self) -> &str {
        self.item.id()
    }

    /// Whole days left before the entry is due for purging, never below zero
    pub fn days_remaining(&self, retention_days: u32, now: DateTime<Utc>) -> u32 {
        let elapsed = (now - self.deleted_at).num_days().max(0);
        let remaining = i64::from(retention_days) - elapsed;
        remaining.max(0) as u32
    }

    pub fn is_expired(&self, retention_days: u32, now: DateTime<Utc>) -> bool {
        self.days_remaining(retention_days, now) == 0
    }
}

pub struct TrashBin {
    entries: Vec<TrashEntry>,
    pub retention_days: u32,
}

impl TrashBin {
    pub fn new(retention_days: u32) -> Self {
        Self {
            entries: Vec::new(),
            retention_days,
        }
    }

    pub fn push(&mut self, entry: TrashEntry) {
        self.entries.push(entry);
    }

    pub fn get(&self, id: &str) -> Option<&TrashEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Takes the first entry with `id` out of the bin
    pub fn take(&mut self, id: &str) -> Option<TrashEntry> {
        let pos = self.entries.iter().position(|entry| entry.id() == id)?;
        Some(self.entries.remove(pos))
    }

    /// Entries in the order they were trashed
    pub fn entries(&self) -> &[TrashEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn folders(&self) -> impl Iterator<Item = &Folder> {
        self.entries.iter().filter_map(|entry| match &entry.item {
            Item::Folder(folder) => Some(folder),
            Item::Document(_) => None,
        })
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.entries.iter().filter_map(|entry| match &entry.item {
            Item::Document(document) => Some(document),
            Item::Folder(_) => None,
        })
    }

    pub fn expired(&self, now: DateTime<Utc>) -> impl Iterator<Item = &TrashEntry> {
        let retention_days = self.retention_days;
        self.entries
            .iter()
            .filter(move |entry| entry.is_expired(retention_days, now))
    }

    /// Removes every expired entry, returning what was dropped
    pub fn drain_expired(&mut self, now: DateTime<Utc>) -> Vec<TrashEntry> {
        let retention_days = self.retention_days;
        let (expired, kept): (Vec<TrashEntry>, Vec<TrashEntry>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.is_expired(retention_days, now));
        self.entries = kept;
        expired
    }
}

impl Default for TrashBin {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION_DAYS)
    }
}
