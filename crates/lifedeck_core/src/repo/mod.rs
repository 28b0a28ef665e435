//! Feature repositories over record stores.
//!
//! # Responsibility
//! - Bind each feature schema to its persistent slot.
//! - Expose the full-collection mutation events feature screens perform
//!   (create, replace, delete, toggle).
//!
//! # Invariants
//! - Every mutation is load -> new full collection -> save.
//! - Mutations addressed to a missing id return `NotFound` and write nothing.
//! - Load never fails on malformed lines; only backend failures surface.

use crate::model::RecordId;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod habit_plan_repo;
pub mod habit_repo;
pub mod journal_repo;
pub mod mood_repo;
pub mod reward_repo;
pub mod routine_repo;
pub mod sport_repo;
pub mod task_repo;

pub use habit_plan_repo::HabitPlanRepository;
pub use habit_repo::HabitRepository;
pub use journal_repo::JournalRepository;
pub use mood_repo::MoodRepository;
pub use reward_repo::RewardRepository;
pub use routine_repo::RoutineRepository;
pub use sport_repo::SportRepository;
pub use task_repo::TaskRepository;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    NotFound { schema: &'static str, id: RecordId },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::NotFound { schema, id } => write!(f, "{schema} not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Maps an absent record to `NotFound` for schema `R`.
pub(crate) fn require<R: crate::codec::LineRecord>(
    record: Option<R>,
    id: RecordId,
) -> RepoResult<R> {
    record.ok_or(RepoError::NotFound {
        schema: R::SCHEMA,
        id,
    })
}

/// Maps a `replace`/`remove` outcome to `NotFound` for schema `R`.
pub(crate) fn require_hit<R: crate::codec::LineRecord>(hit: bool, id: RecordId) -> RepoResult<()> {
    if hit {
        Ok(())
    } else {
        Err(RepoError::NotFound {
            schema: R::SCHEMA,
            id,
        })
    }
}
