//! Habit record.
//!
//! Line layout:
//! `id||name||description||targetPerDay||enabled||streak||lastDoneDay||points`.
//! The streak columns are trailing; lines written before they existed decode
//! with no streak, never done, zero points.

use crate::clock::DayIndex;
use crate::codec::{encode_bool, DecodeResult, FieldReader, LineRecord};
use crate::model::{advance_streak, Identified, RecordId, StreakRecord};
use serde::{Deserialize, Serialize};

/// Stored in place of `last_done_day` when the habit was never completed.
pub(crate) const NEVER_DONE: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub target_per_day: i64,
    pub enabled: bool,
    pub streak: i64,
    pub last_done_day: Option<DayIndex>,
    pub points: i64,
}

impl Habit {
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            target_per_day: 1,
            enabled: true,
            streak: 0,
            last_done_day: None,
            points: 0,
        }
    }

    /// Records a completion on `today` and updates the streak.
    pub fn mark_done(&mut self, today: DayIndex) {
        let (streak, last) = advance_streak(self.streak, self.last_done_day, today);
        self.streak = streak;
        self.last_done_day = last;
    }

    /// Streak as seen on `today`: zero once a full day was missed.
    pub fn current_streak(&self, today: DayIndex) -> i64 {
        match self.last_done_day {
            Some(day) if day >= today - 1 => self.streak,
            _ => 0,
        }
    }
}

impl Identified for Habit {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl StreakRecord for Habit {
    fn streak(&self) -> i64 {
        self.streak
    }

    fn last_done_day(&self) -> Option<DayIndex> {
        self.last_done_day
    }

    fn points(&self) -> i64 {
        self.points
    }
}

impl LineRecord for Habit {
    const SCHEMA: &'static str = "habit";
    const MIN_FIELDS: usize = 5;

    fn encode_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.description.clone(),
            self.target_per_day.to_string(),
            encode_bool(self.enabled),
            self.streak.to_string(),
            self.last_done_day.unwrap_or(NEVER_DONE).to_string(),
            self.points.to_string(),
        ]
    }

    fn decode_fields(fields: &mut FieldReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            id: fields.id()?,
            name: fields.text(),
            description: fields.text(),
            target_per_day: fields.int_or(1),
            enabled: fields.bool_or(true),
            streak: fields.int_or(0),
            last_done_day: decode_day(fields.int_or(NEVER_DONE)),
            points: fields.int_or(0),
        })
    }
}

pub(crate) fn decode_day(value: i64) -> Option<DayIndex> {
    (value >= 0).then_some(value)
}
