//! Habit plan repository.

use crate::model::habit_plan::{HabitPlan, PlanStatus};
use crate::model::RecordId;
use crate::prefs::PreferenceArea;
use crate::repo::{require, require_hit, RepoResult};
use crate::store::{RecordStore, StoreResult, StoreSlot, StoredRecord};

impl StoredRecord for HabitPlan {
    const SLOT: StoreSlot = StoreSlot {
        namespace: "habit_plans",
        slot_key: "habit_plans_v1",
    };
}

pub struct HabitPlanRepository<'p> {
    store: RecordStore<'p, HabitPlan>,
}

impl<'p> HabitPlanRepository<'p> {
    pub fn new(prefs: &'p dyn PreferenceArea) -> Self {
        Self {
            store: RecordStore::new(prefs),
        }
    }

    pub fn list(&self) -> StoreResult<Vec<HabitPlan>> {
        self.store.load()
    }

    pub fn add(&self, plan: HabitPlan) -> StoreResult<()> {
        self.store.append(plan)
    }

    pub fn replace(&self, plan: HabitPlan) -> RepoResult<()> {
        let id = plan.id;
        require_hit::<HabitPlan>(self.store.replace(plan)?, id)
    }

    pub fn remove(&self, id: RecordId) -> RepoResult<()> {
        require_hit::<HabitPlan>(self.store.remove(id)? > 0, id)
    }

    pub fn set_status(&self, id: RecordId, status: PlanStatus) -> RepoResult<HabitPlan> {
        require(self.store.modify(id, |plan| plan.status = status)?, id)
    }

    pub fn active_plans(&self) -> StoreResult<Vec<HabitPlan>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|plan| plan.status == PlanStatus::Active)
            .collect())
    }
}
