//! Rolling-window summaries for feature dashboards.
//!
//! Every series has one value per day of the window, oldest first. Days
//! without records read as zero.

use crate::clock::{count_by_day, last_n_days, sum_by_day, DayIndex};
use crate::model::journal::JournalEntry;
use crate::model::mood::MoodEntry;
use crate::model::sport::{SportGoal, SportSession};
use crate::model::RecordId;
use serde::Serialize;
use std::collections::BTreeSet;

/// Days per week, used for weekly goal targets.
pub const WEEK_DAYS: usize = 7;

/// Chart-ready series over a day window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySeries {
    pub days: Vec<DayIndex>,
    pub values: Vec<i64>,
}

impl DaySeries {
    pub fn total(&self) -> i64 {
        self.values.iter().copied().fold(0, i64::saturating_add)
    }

    /// Number of days with a non-zero value.
    pub fn active_days(&self) -> usize {
        self.values.iter().filter(|value| **value != 0).count()
    }
}

/// Mood rating per day; the latest entry wins if a day has several.
pub fn mood_series(entries: &[MoodEntry], today: DayIndex, days: usize) -> DaySeries {
    let window = last_n_days(today, days);
    let values = window
        .iter()
        .map(|day| {
            entries
                .iter()
                .rev()
                .find(|entry| entry.day_index == *day)
                .map_or(0, |entry| entry.mood)
        })
        .collect();
    DaySeries {
        days: window,
        values,
    }
}

/// Energy rating per day; same selection rule as `mood_series`.
pub fn energy_series(entries: &[MoodEntry], today: DayIndex, days: usize) -> DaySeries {
    let window = last_n_days(today, days);
    let values = window
        .iter()
        .map(|day| {
            entries
                .iter()
                .rev()
                .find(|entry| entry.day_index == *day)
                .map_or(0, |entry| entry.energy)
        })
        .collect();
    DaySeries {
        days: window,
        values,
    }
}

/// Minutes trained per day across every session, with or without a goal.
pub fn sport_minutes_series(sessions: &[SportSession], today: DayIndex, days: usize) -> DaySeries {
    let window = last_n_days(today, days);
    let values = sum_by_day(
        &window,
        sessions,
        |session| session.day_index,
        |session| session.minutes,
    );
    DaySeries {
        days: window,
        values,
    }
}

/// Journal entries written per day.
pub fn journal_count_series(entries: &[JournalEntry], today: DayIndex, days: usize) -> DaySeries {
    let window = last_n_days(today, days);
    let values = count_by_day(&window, entries, |entry| entry.day_index);
    DaySeries {
        days: window,
        values,
    }
}

/// Sessions and minutes attributed to one goal inside a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub goal_id: RecordId,
    pub name: String,
    pub sessions: i64,
    pub minutes: i64,
    pub target_sessions: i64,
    /// Sessions that reached the goal's per-session minute target.
    pub sessions_meeting_target: i64,
}

impl GoalProgress {
    pub fn is_met(&self) -> bool {
        self.target_sessions > 0 && self.sessions_meeting_target >= self.target_sessions
    }
}

/// Window totals for sessions not attributable to an existing goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FreeStanding {
    pub sessions: i64,
    pub minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportOverview {
    pub goals: Vec<GoalProgress>,
    /// Sessions without a goal id or whose goal no longer exists.
    pub free_standing: FreeStanding,
}

/// Per-goal progress over the last `days` days ending at `today`.
///
/// Sessions whose goal is missing are counted as free-standing.
pub fn sport_overview(
    goals: &[SportGoal],
    sessions: &[SportSession],
    today: DayIndex,
    days: usize,
) -> SportOverview {
    let first_day = today.saturating_sub(days as i64).saturating_add(1);
    let in_window: Vec<&SportSession> = sessions
        .iter()
        .filter(|session| session.day_index >= first_day && session.day_index <= today)
        .collect();
    let known: BTreeSet<RecordId> = goals.iter().map(|goal| goal.id).collect();

    let progress = goals
        .iter()
        .map(|goal| {
            let matching = in_window
                .iter()
                .filter(|session| session.goal_id == Some(goal.id));
            let mut progress = GoalProgress {
                goal_id: goal.id,
                name: goal.name.clone(),
                sessions: 0,
                minutes: 0,
                target_sessions: goal.target_sessions_per_week,
                sessions_meeting_target: 0,
            };
            for session in matching {
                progress.sessions += 1;
                progress.minutes = progress.minutes.saturating_add(session.minutes);
                if session.minutes >= goal.target_minutes_per_session {
                    progress.sessions_meeting_target += 1;
                }
            }
            progress
        })
        .collect();

    let mut free_standing = FreeStanding::default();
    for session in in_window
        .iter()
        .filter(|session| !session.goal_id.is_some_and(|id| known.contains(&id)))
    {
        free_standing.sessions += 1;
        free_standing.minutes = free_standing.minutes.saturating_add(session.minutes);
    }

    SportOverview {
        goals: progress,
        free_standing,
    }
}

/// Weekly sport overview (last seven days).
pub fn weekly_sport_overview(
    goals: &[SportGoal],
    sessions: &[SportSession],
    today: DayIndex,
) -> SportOverview {
    sport_overview(goals, sessions, today, WEEK_DAYS)
}
