//! Core persistence and aggregation layer for LifeDeck.
//!
//! Feature screens (tasks, habits, mood, journal, sport, rewards) read and
//! write through the repositories here; this crate owns record encoding,
//! slot storage, day bucketing and the rewards points total.

pub mod clock;
pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod repo;
pub mod service;
pub mod settings;
pub mod store;

pub use clock::{Clock, DayIndex, FixedClock, SystemClock};
pub use codec::{decode_line, encode_line, DecodeError, LineRecord};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::habit::Habit;
pub use model::habit_plan::{HabitPlan, PlanStatus};
pub use model::journal::{JournalEntry, JournalTemplate};
pub use model::mood::MoodEntry;
pub use model::reward::Reward;
pub use model::routine::Routine;
pub use model::sport::{SportGoal, SportSession};
pub use model::task::Task;
pub use model::{IdGenerator, RecordId};
pub use prefs::{MemoryPreferences, PreferenceArea, PrefsError, SqlitePreferences};
pub use repo::{
    HabitPlanRepository, HabitRepository, JournalRepository, MoodRepository, RepoError,
    RepoResult, RewardRepository, RoutineRepository, SportRepository, TaskRepository,
};
pub use service::rewards::{ClaimOutcome, PointsBreakdown, PointsSnapshot, RewardsService};
pub use settings::{AppSettings, SettingsHandle};
pub use store::{LoadReport, RecordStore, StoreError, StoreResult, StoreSlot, StoredRecord};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
