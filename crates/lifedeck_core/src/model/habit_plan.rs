//! Habit plan record: the long-form "why / cue / action / reward" design for a
//! habit the user is building.
//!
//! Line layout:
//! `id||name||why||cue||action||reward||frequencyPerWeek||minVersion||obstacles||antiObstacles||startDate||status`.

use crate::codec::{DecodeResult, FieldReader, LineRecord};
use crate::model::{Identified, RecordId};
use serde::{Deserialize, Serialize};

pub const MAX_FREQUENCY_PER_WEEK: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Active,
    Paused,
    Completed,
}

impl PlanStatus {
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }

    /// Unknown codes decode as `Active`.
    pub fn from_code(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "paused" => Self::Paused,
            "completed" => Self::Completed,
            _ => Self::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitPlan {
    pub id: RecordId,
    pub name: String,
    pub why: String,
    pub cue: String,
    pub action: String,
    pub reward: String,
    pub frequency_per_week: i64,
    /// Smallest acceptable version of the action on a bad day.
    pub min_version: String,
    pub obstacles: String,
    /// Counter-measures for `obstacles`.
    pub anti_obstacles: String,
    pub start_date: String,
    pub status: PlanStatus,
}

impl HabitPlan {
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            why: String::new(),
            cue: String::new(),
            action: String::new(),
            reward: String::new(),
            frequency_per_week: MAX_FREQUENCY_PER_WEEK,
            min_version: String::new(),
            obstacles: String::new(),
            anti_obstacles: String::new(),
            start_date: String::new(),
            status: PlanStatus::Active,
        }
    }
}

impl Identified for HabitPlan {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl LineRecord for HabitPlan {
    const SCHEMA: &'static str = "habit_plan";
    const MIN_FIELDS: usize = 12;

    fn encode_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.why.clone(),
            self.cue.clone(),
            self.action.clone(),
            self.reward.clone(),
            self.frequency_per_week
                .clamp(1, MAX_FREQUENCY_PER_WEEK)
                .to_string(),
            self.min_version.clone(),
            self.obstacles.clone(),
            self.anti_obstacles.clone(),
            self.start_date.clone(),
            self.status.as_code().to_string(),
        ]
    }

    fn decode_fields(fields: &mut FieldReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            id: fields.id()?,
            name: fields.text(),
            why: fields.text(),
            cue: fields.text(),
            action: fields.text(),
            reward: fields.text(),
            frequency_per_week: fields.int_clamped(
                MAX_FREQUENCY_PER_WEEK,
                1,
                MAX_FREQUENCY_PER_WEEK,
            ),
            min_version: fields.text(),
            obstacles: fields.text(),
            anti_obstacles: fields.text(),
            start_date: fields.text(),
            status: PlanStatus::from_code(&fields.text()),
        })
    }
}
