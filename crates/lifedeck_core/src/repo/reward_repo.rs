//! Reward repository.

use crate::model::reward::Reward;
use crate::model::RecordId;
use crate::prefs::PreferenceArea;
use crate::repo::{require, require_hit, RepoResult};
use crate::store::{RecordStore, StoreResult, StoreSlot, StoredRecord};

impl StoredRecord for Reward {
    const SLOT: StoreSlot = StoreSlot {
        namespace: "rewards",
        slot_key: "rewards_v1",
    };
}

pub struct RewardRepository<'p> {
    store: RecordStore<'p, Reward>,
}

impl<'p> RewardRepository<'p> {
    pub fn new(prefs: &'p dyn PreferenceArea) -> Self {
        Self {
            store: RecordStore::new(prefs),
        }
    }

    pub fn list(&self) -> StoreResult<Vec<Reward>> {
        self.store.load()
    }

    pub fn get(&self, id: RecordId) -> RepoResult<Reward> {
        require(self.store.find(id)?, id)
    }

    pub fn add(&self, reward: Reward) -> StoreResult<()> {
        self.store.append(reward)
    }

    pub fn replace(&self, reward: Reward) -> RepoResult<()> {
        let id = reward.id;
        require_hit::<Reward>(self.store.replace(reward)?, id)
    }

    pub fn remove(&self, id: RecordId) -> RepoResult<()> {
        require_hit::<Reward>(self.store.remove(id)? > 0, id)
    }

    /// Marks a reward claimed. Claims are permanent; no points are deducted.
    pub fn claim(&self, id: RecordId) -> RepoResult<Reward> {
        require(self.store.modify(id, |reward| reward.is_claimed = true)?, id)
    }
}
