//! Mood repository. Holds at most one entry per day.

use crate::clock::DayIndex;
use crate::model::mood::MoodEntry;
use crate::model::RecordId;
use crate::prefs::PreferenceArea;
use crate::repo::{require_hit, RepoResult};
use crate::store::{RecordStore, StoreResult, StoreSlot, StoredRecord};

impl StoredRecord for MoodEntry {
    const SLOT: StoreSlot = StoreSlot {
        namespace: "mood",
        slot_key: "mood_entries_v1",
    };
}

pub struct MoodRepository<'p> {
    store: RecordStore<'p, MoodEntry>,
}

impl<'p> MoodRepository<'p> {
    pub fn new(prefs: &'p dyn PreferenceArea) -> Self {
        Self {
            store: RecordStore::new(prefs),
        }
    }

    pub fn list(&self) -> StoreResult<Vec<MoodEntry>> {
        self.store.load()
    }

    /// Stores `entry` as the only entry of its day.
    ///
    /// Existing entries on the same day are removed first, then `entry` is
    /// appended. Returns how many entries were replaced.
    pub fn record_for_day(&self, entry: MoodEntry) -> StoreResult<usize> {
        self.store.update(|entries| {
            let before = entries.len();
            entries.retain(|existing| existing.day_index != entry.day_index);
            let replaced = before - entries.len();
            entries.push(entry);
            replaced
        })
    }

    pub fn entry_for_day(&self, day: DayIndex) -> StoreResult<Option<MoodEntry>> {
        Ok(self
            .list()?
            .into_iter()
            .rev()
            .find(|entry| entry.day_index == day))
    }

    pub fn remove(&self, id: RecordId) -> RepoResult<()> {
        require_hit::<MoodEntry>(self.store.remove(id)? > 0, id)
    }
}
