//! Feature record schemas.
//!
//! # Responsibility
//! - Define one typed record per feature store and its line layout.
//! - Assign record ids from wall-clock milliseconds.
//!
//! # Invariants
//! - Records are replaced whole; there are no partial field updates.
//! - Deletion is exclusion from the persisted collection (no tombstones).
//! - Bounded scales (mood, energy, intensity) are clamped on write and read.

use crate::clock::{Clock, DayIndex};
use std::sync::atomic::{AtomicI64, Ordering};

pub mod habit;
pub mod habit_plan;
pub mod journal;
pub mod mood;
pub mod reward;
pub mod routine;
pub mod sport;
pub mod task;

/// Record identifier: creation time in epoch milliseconds.
pub type RecordId = i64;

/// Lower bound of 1..5 rating scales.
pub const SCALE_MIN: i64 = 1;
/// Upper bound of 1..5 rating scales.
pub const SCALE_MAX: i64 = 5;

pub fn clamp_scale(value: i64) -> i64 {
    value.clamp(SCALE_MIN, SCALE_MAX)
}

/// Records addressable by id inside their collection.
pub trait Identified {
    fn id(&self) -> RecordId;
}

/// Reward-relevant completion state shared by habits and routines.
pub trait StreakRecord {
    fn streak(&self) -> i64;
    fn last_done_day(&self) -> Option<DayIndex>;
    fn points(&self) -> i64;

    fn is_done_on(&self, day: DayIndex) -> bool {
        self.last_done_day() == Some(day)
    }
}

/// Applies one completion on `today` to a `(streak, last_done_day)` pair.
///
/// Completing twice on the same day is a no-op; completing the day after the
/// previous completion extends the streak; any gap restarts it at 1.
pub(crate) fn advance_streak(
    streak: i64,
    last_done_day: Option<DayIndex>,
    today: DayIndex,
) -> (i64, Option<DayIndex>) {
    match last_done_day {
        Some(day) if day == today => (streak, last_done_day),
        Some(day) if day == today - 1 => (streak.max(0).saturating_add(1), Some(today)),
        _ => (1, Some(today)),
    }
}

/// Wall-clock millisecond id source.
///
/// Ids handed out by one generator are strictly increasing: a request within
/// the same millisecond as the previous id gets `previous + 1`. Ids from
/// different processes (or persisted data) are not checked for collisions.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self, clock: &dyn Clock) -> RecordId {
        let now = clock.now_millis();
        let mut previous = self.last.load(Ordering::SeqCst);
        loop {
            let candidate = now.max(previous + 1);
            match self.last.compare_exchange(
                previous,
                candidate,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return candidate,
                Err(actual) => previous = actual,
            }
        }
    }
}
