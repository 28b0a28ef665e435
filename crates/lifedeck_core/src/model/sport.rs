//! Sport goal and session records.
//!
//! Goal layout: `id||name||targetSessionsPerWeek||targetMinutesPerSession`.
//! Session layout: `id||dayIndex||goalId||minutes||intensity`, with an empty
//! `goalId` for sessions logged without a goal.

use crate::clock::DayIndex;
use crate::codec::{encode_optional_id, DecodeResult, FieldReader, LineRecord};
use crate::model::{clamp_scale, Identified, RecordId, SCALE_MAX, SCALE_MIN};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportGoal {
    pub id: RecordId,
    pub name: String,
    pub target_sessions_per_week: i64,
    pub target_minutes_per_session: i64,
}

impl SportGoal {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        target_sessions_per_week: i64,
        target_minutes_per_session: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            target_sessions_per_week: target_sessions_per_week.max(0),
            target_minutes_per_session: target_minutes_per_session.max(0),
        }
    }
}

impl Identified for SportGoal {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl LineRecord for SportGoal {
    const SCHEMA: &'static str = "sport_goal";
    const MIN_FIELDS: usize = 4;

    fn encode_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.target_sessions_per_week.to_string(),
            self.target_minutes_per_session.to_string(),
        ]
    }

    fn decode_fields(fields: &mut FieldReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            id: fields.id()?,
            name: fields.text(),
            target_sessions_per_week: fields.int_or(0),
            target_minutes_per_session: fields.int_or(0),
        })
    }
}

/// One logged workout.
///
/// `goal_id` is a weak reference; the goal may since have been removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportSession {
    pub id: RecordId,
    pub day_index: DayIndex,
    pub goal_id: Option<RecordId>,
    pub minutes: i64,
    /// 1..=5.
    pub intensity: i64,
}

impl SportSession {
    pub fn new(
        id: RecordId,
        day_index: DayIndex,
        goal_id: Option<RecordId>,
        minutes: i64,
        intensity: i64,
    ) -> Self {
        Self {
            id,
            day_index,
            goal_id,
            minutes: minutes.max(0),
            intensity: clamp_scale(intensity),
        }
    }
}

impl Identified for SportSession {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl LineRecord for SportSession {
    const SCHEMA: &'static str = "sport_session";
    const MIN_FIELDS: usize = 5;

    fn encode_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.day_index.to_string(),
            encode_optional_id(self.goal_id),
            self.minutes.max(0).to_string(),
            clamp_scale(self.intensity).to_string(),
        ]
    }

    fn decode_fields(fields: &mut FieldReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            id: fields.id()?,
            day_index: fields.int_or(0),
            goal_id: fields.optional_id(),
            minutes: fields.int_or(0).max(0),
            intensity: fields.int_clamped(SCALE_MIN, SCALE_MIN, SCALE_MAX),
        })
    }
}
