//! Task repository.

use crate::model::task::Task;
use crate::model::RecordId;
use crate::prefs::PreferenceArea;
use crate::repo::{require, require_hit, RepoResult};
use crate::store::{RecordStore, StoreResult, StoreSlot, StoredRecord};

impl StoredRecord for Task {
    const SLOT: StoreSlot = StoreSlot {
        namespace: "tasks",
        slot_key: "tasks_v1",
    };
}

pub struct TaskRepository<'p> {
    store: RecordStore<'p, Task>,
}

impl<'p> TaskRepository<'p> {
    pub fn new(prefs: &'p dyn PreferenceArea) -> Self {
        Self {
            store: RecordStore::new(prefs),
        }
    }

    pub fn list(&self) -> StoreResult<Vec<Task>> {
        self.store.load()
    }

    pub fn save_all(&self, tasks: &[Task]) -> StoreResult<()> {
        self.store.save(tasks)
    }

    pub fn add(&self, task: Task) -> StoreResult<()> {
        self.store.append(task)
    }

    pub fn replace(&self, task: Task) -> RepoResult<()> {
        let id = task.id;
        require_hit::<Task>(self.store.replace(task)?, id)
    }

    pub fn remove(&self, id: RecordId) -> RepoResult<()> {
        require_hit::<Task>(self.store.remove(id)? > 0, id)
    }

    /// Flips `done` and returns the updated task.
    pub fn toggle_done(&self, id: RecordId) -> RepoResult<Task> {
        let updated = self.store.modify(id, |task| *task = task.toggled())?;
        require(updated, id)
    }

    /// Tasks whose `date` string equals `date`.
    pub fn for_date(&self, date: &str) -> StoreResult<Vec<Task>> {
        let date = date.trim();
        Ok(self
            .list()?
            .into_iter()
            .filter(|task| task.date.trim() == date)
            .collect())
    }
}
