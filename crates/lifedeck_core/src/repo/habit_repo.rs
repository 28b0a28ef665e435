//! Habit repository.

use crate::clock::DayIndex;
use crate::model::habit::Habit;
use crate::model::RecordId;
use crate::prefs::PreferenceArea;
use crate::repo::{require, require_hit, RepoResult};
use crate::store::{RecordStore, StoreResult, StoreSlot, StoredRecord};

impl StoredRecord for Habit {
    const SLOT: StoreSlot = StoreSlot {
        namespace: "habits",
        slot_key: "habits_v1",
    };
}

pub struct HabitRepository<'p> {
    store: RecordStore<'p, Habit>,
}

impl<'p> HabitRepository<'p> {
    pub fn new(prefs: &'p dyn PreferenceArea) -> Self {
        Self {
            store: RecordStore::new(prefs),
        }
    }

    pub fn list(&self) -> StoreResult<Vec<Habit>> {
        self.store.load()
    }

    pub fn save_all(&self, habits: &[Habit]) -> StoreResult<()> {
        self.store.save(habits)
    }

    pub fn add(&self, habit: Habit) -> StoreResult<()> {
        self.store.append(habit)
    }

    pub fn replace(&self, habit: Habit) -> RepoResult<()> {
        let id = habit.id;
        require_hit::<Habit>(self.store.replace(habit)?, id)
    }

    pub fn remove(&self, id: RecordId) -> RepoResult<()> {
        require_hit::<Habit>(self.store.remove(id)? > 0, id)
    }

    pub fn set_enabled(&self, id: RecordId, enabled: bool) -> RepoResult<Habit> {
        require(self.store.modify(id, |habit| habit.enabled = enabled)?, id)
    }

    /// Records a completion for `today`, extending or restarting the streak.
    pub fn mark_done(&self, id: RecordId, today: DayIndex) -> RepoResult<Habit> {
        require(self.store.modify(id, |habit| habit.mark_done(today))?, id)
    }

    /// Enabled habits not yet completed on `today`.
    pub fn pending_for(&self, today: DayIndex) -> StoreResult<Vec<Habit>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|habit| habit.enabled && habit.last_done_day != Some(today))
            .collect())
    }
}
