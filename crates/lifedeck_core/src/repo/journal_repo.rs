//! Journal repository.
//!
//! Tags are normalized on every write path so that filters can compare
//! exact strings.

use crate::model::journal::{normalize_tag, normalize_tags, JournalEntry};
use crate::model::RecordId;
use crate::prefs::PreferenceArea;
use crate::repo::{require, require_hit, RepoResult};
use crate::store::{RecordStore, StoreResult, StoreSlot, StoredRecord};

impl StoredRecord for JournalEntry {
    const SLOT: StoreSlot = StoreSlot {
        namespace: "journal",
        slot_key: "journal_entries_v1",
    };
}

pub struct JournalRepository<'p> {
    store: RecordStore<'p, JournalEntry>,
}

impl<'p> JournalRepository<'p> {
    pub fn new(prefs: &'p dyn PreferenceArea) -> Self {
        Self {
            store: RecordStore::new(prefs),
        }
    }

    pub fn list(&self) -> StoreResult<Vec<JournalEntry>> {
        self.store.load()
    }

    pub fn add(&self, mut entry: JournalEntry) -> StoreResult<JournalEntry> {
        entry.tags = normalize_tags(&entry.tags);
        self.store.append(entry.clone())?;
        Ok(entry)
    }

    pub fn replace(&self, mut entry: JournalEntry) -> RepoResult<()> {
        entry.tags = normalize_tags(&entry.tags);
        let id = entry.id;
        require_hit::<JournalEntry>(self.store.replace(entry)?, id)
    }

    pub fn remove(&self, id: RecordId) -> RepoResult<()> {
        require_hit::<JournalEntry>(self.store.remove(id)? > 0, id)
    }

    pub fn toggle_favorite(&self, id: RecordId) -> RepoResult<JournalEntry> {
        let updated = self
            .store
            .modify(id, |entry| entry.is_favorite = !entry.is_favorite)?;
        require(updated, id)
    }

    pub fn favorites(&self) -> StoreResult<Vec<JournalEntry>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|entry| entry.is_favorite)
            .collect())
    }

    /// Entries carrying `tag` (compared after normalization).
    pub fn with_tag(&self, tag: &str) -> StoreResult<Vec<JournalEntry>> {
        let Some(tag) = normalize_tag(tag) else {
            return Ok(Vec::new());
        };
        Ok(self
            .list()?
            .into_iter()
            .filter(|entry| entry.tags.contains(&tag))
            .collect())
    }

    /// Distinct tags in first-use order.
    pub fn all_tags(&self) -> StoreResult<Vec<String>> {
        let tags: Vec<String> = self
            .list()?
            .into_iter()
            .flat_map(|entry| entry.tags)
            .collect();
        Ok(normalize_tags(&tags))
    }
}
