//! Routine repository. Routines are owned by the routine-builder feature; the
//! core reads them for points and records completions.

use crate::clock::DayIndex;
use crate::model::routine::Routine;
use crate::model::RecordId;
use crate::prefs::PreferenceArea;
use crate::repo::{require, require_hit, RepoResult};
use crate::store::{RecordStore, StoreResult, StoreSlot, StoredRecord};

impl StoredRecord for Routine {
    const SLOT: StoreSlot = StoreSlot {
        namespace: "routines",
        slot_key: "routines_v1",
    };
}

pub struct RoutineRepository<'p> {
    store: RecordStore<'p, Routine>,
}

impl<'p> RoutineRepository<'p> {
    pub fn new(prefs: &'p dyn PreferenceArea) -> Self {
        Self {
            store: RecordStore::new(prefs),
        }
    }

    pub fn list(&self) -> StoreResult<Vec<Routine>> {
        self.store.load()
    }

    pub fn add(&self, routine: Routine) -> StoreResult<()> {
        self.store.append(routine)
    }

    pub fn remove(&self, id: RecordId) -> RepoResult<()> {
        require_hit::<Routine>(self.store.remove(id)? > 0, id)
    }

    pub fn mark_done(&self, id: RecordId, today: DayIndex) -> RepoResult<Routine> {
        require(self.store.modify(id, |routine| routine.mark_done(today))?, id)
    }
}
