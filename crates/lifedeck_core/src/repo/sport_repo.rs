//! Sport goals and sessions.
//!
//! Goals and sessions live in separate slots of the `sport` namespace.
//! Removing a goal never touches sessions; their `goal_id` is left dangling
//! and readers treat such sessions as free-standing.

use crate::model::sport::{SportGoal, SportSession};
use crate::model::RecordId;
use crate::prefs::PreferenceArea;
use crate::repo::{require_hit, RepoResult};
use crate::store::{RecordStore, StoreResult, StoreSlot, StoredRecord};

impl StoredRecord for SportGoal {
    const SLOT: StoreSlot = StoreSlot {
        namespace: "sport",
        slot_key: "sport_goals_v1",
    };
}

impl StoredRecord for SportSession {
    const SLOT: StoreSlot = StoreSlot {
        namespace: "sport",
        slot_key: "sport_sessions_v1",
    };
}

pub struct SportRepository<'p> {
    goals: RecordStore<'p, SportGoal>,
    sessions: RecordStore<'p, SportSession>,
}

impl<'p> SportRepository<'p> {
    pub fn new(prefs: &'p dyn PreferenceArea) -> Self {
        Self {
            goals: RecordStore::new(prefs),
            sessions: RecordStore::new(prefs),
        }
    }

    pub fn list_goals(&self) -> StoreResult<Vec<SportGoal>> {
        self.goals.load()
    }

    pub fn add_goal(&self, goal: SportGoal) -> StoreResult<()> {
        self.goals.append(goal)
    }

    pub fn replace_goal(&self, goal: SportGoal) -> RepoResult<()> {
        let id = goal.id;
        require_hit::<SportGoal>(self.goals.replace(goal)?, id)
    }

    pub fn remove_goal(&self, id: RecordId) -> RepoResult<()> {
        require_hit::<SportGoal>(self.goals.remove(id)? > 0, id)
    }

    pub fn list_sessions(&self) -> StoreResult<Vec<SportSession>> {
        self.sessions.load()
    }

    /// Appends a session. `goal_id` is stored as given, without checking
    /// that the goal exists.
    pub fn log_session(&self, session: SportSession) -> StoreResult<()> {
        self.sessions.append(session)
    }

    pub fn remove_session(&self, id: RecordId) -> RepoResult<()> {
        require_hit::<SportSession>(self.sessions.remove(id)? > 0, id)
    }
}
