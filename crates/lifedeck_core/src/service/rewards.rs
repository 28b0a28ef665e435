//! Rewards points aggregation.
//!
//! # Responsibility
//! - Snapshot the tasks, habits and routines collections.
//! - Reduce the snapshot into today's available points.
//! - Gate reward claims on the available total.
//!
//! # Invariants
//! - All three collections are read before any reduction happens.
//! - A collection whose load fails contributes zero; no error escapes.
//! - Points are never spent: claiming a reward does not lower the total.

use crate::clock::{Clock, DayIndex};
use crate::model::habit::Habit;
use crate::model::reward::Reward;
use crate::model::routine::Routine;
use crate::model::task::Task;
use crate::model::{RecordId, StreakRecord};
use crate::prefs::PreferenceArea;
use crate::repo::{
    HabitRepository, RepoResult, RewardRepository, RoutineRepository, TaskRepository,
};
use crate::store::StoreResult;
use log::{info, warn};
use serde::Serialize;

/// Point-relevant collections read at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsSnapshot {
    pub tasks: Vec<Task>,
    pub habits: Vec<Habit>,
    pub routines: Vec<Routine>,
}

/// Per-source contribution to the available total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub task_points: i64,
    pub habit_points: i64,
    pub routine_points: i64,
}

impl PointsBreakdown {
    pub fn available(&self) -> i64 {
        self.task_points
            .saturating_add(self.habit_points)
            .saturating_add(self.routine_points)
    }
}

impl PointsSnapshot {
    /// Reduces the snapshot for `today`.
    ///
    /// - every done task adds its points, whatever day it was done;
    /// - a habit or routine completed on `today` adds `streak * points`;
    /// - negative stored values never reduce the total;
    /// - sums saturate at `i64::MAX` instead of overflowing.
    pub fn breakdown(&self, today: DayIndex) -> PointsBreakdown {
        let task_points = self
            .tasks
            .iter()
            .filter(|task| task.done)
            .map(|task| task.points.max(0))
            .fold(0, i64::saturating_add);

        PointsBreakdown {
            task_points,
            habit_points: streak_points(&self.habits, today),
            routine_points: streak_points(&self.routines, today),
        }
    }
}

/// Sum of `streak * points` over records completed on `today`.
pub fn streak_points<R: StreakRecord>(records: &[R], today: DayIndex) -> i64 {
    records
        .iter()
        .filter(|record| record.is_done_on(today))
        .map(|record| {
            let points = record.points().max(0);
            record.streak().max(0).saturating_mul(points)
        })
        .fold(0, i64::saturating_add)
}

/// Outcome of a claim attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    Claimed(Reward),
    AlreadyClaimed,
    InsufficientPoints { available: i64, target: i64 },
}

/// Read-only points aggregator plus reward claim gate.
pub struct RewardsService<'p> {
    tasks: TaskRepository<'p>,
    habits: HabitRepository<'p>,
    routines: RoutineRepository<'p>,
    rewards: RewardRepository<'p>,
}

impl<'p> RewardsService<'p> {
    pub fn new(prefs: &'p dyn PreferenceArea) -> Self {
        Self {
            tasks: TaskRepository::new(prefs),
            habits: HabitRepository::new(prefs),
            routines: RoutineRepository::new(prefs),
            rewards: RewardRepository::new(prefs),
        }
    }

    /// Reads all point-relevant collections. Failed loads become empty.
    pub fn snapshot(&self) -> PointsSnapshot {
        PointsSnapshot {
            tasks: or_empty("tasks", self.tasks.list()),
            habits: or_empty("habits", self.habits.list()),
            routines: or_empty("routines", self.routines.list()),
        }
    }

    pub fn breakdown(&self, today: DayIndex) -> PointsBreakdown {
        self.snapshot().breakdown(today)
    }

    /// Points available on the clock's current day.
    pub fn available_points(&self, clock: &dyn Clock) -> i64 {
        let today = clock.today_index();
        let breakdown = self.breakdown(today);
        let available = breakdown.available();
        info!(
            "event=points_aggregate module=rewards status=ok day={today} tasks={} habits={} routines={} available={available}",
            breakdown.task_points, breakdown.habit_points, breakdown.routine_points
        );
        available
    }

    /// Unclaimed rewards whose target is met by `available`.
    pub fn claimable(&self, available: i64) -> StoreResult<Vec<Reward>> {
        Ok(self
            .rewards
            .list()?
            .into_iter()
            .filter(|reward| reward.is_claimable(available))
            .collect())
    }

    /// Claims `id` if today's points cover its target.
    pub fn claim(&self, id: RecordId, clock: &dyn Clock) -> RepoResult<ClaimOutcome> {
        let reward = self.rewards.get(id)?;
        if reward.is_claimed {
            return Ok(ClaimOutcome::AlreadyClaimed);
        }

        let available = self.available_points(clock);
        if available < reward.target_points {
            return Ok(ClaimOutcome::InsufficientPoints {
                available,
                target: reward.target_points,
            });
        }

        let claimed = self.rewards.claim(id)?;
        info!(
            "event=reward_claim module=rewards status=ok reward_id={id} target={} available={available}",
            claimed.target_points
        );
        Ok(ClaimOutcome::Claimed(claimed))
    }
}

fn or_empty<R>(source: &'static str, loaded: StoreResult<Vec<R>>) -> Vec<R> {
    loaded.unwrap_or_else(|err| {
        warn!(
            "event=points_aggregate module=rewards status=degraded source={source} error={err}"
        );
        Vec::new()
    })
}
