//! Mood entry record. Layout: `id||dayIndex||mood||energy||note`.

use crate::clock::DayIndex;
use crate::codec::{DecodeResult, FieldReader, LineRecord};
use crate::model::{clamp_scale, Identified, RecordId, SCALE_MAX, SCALE_MIN};
use serde::{Deserialize, Serialize};

/// Neutral rating used when a stored value cannot be parsed.
pub const NEUTRAL_RATING: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: RecordId,
    pub day_index: DayIndex,
    /// 1..=5.
    pub mood: i64,
    /// 1..=5.
    pub energy: i64,
    pub note: String,
}

impl MoodEntry {
    /// Creates an entry with both ratings clamped into 1..=5.
    pub fn new(id: RecordId, day_index: DayIndex, mood: i64, energy: i64) -> Self {
        Self {
            id,
            day_index,
            mood: clamp_scale(mood),
            energy: clamp_scale(energy),
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

impl Identified for MoodEntry {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl LineRecord for MoodEntry {
    const SCHEMA: &'static str = "mood";
    const MIN_FIELDS: usize = 4;

    fn encode_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.day_index.to_string(),
            clamp_scale(self.mood).to_string(),
            clamp_scale(self.energy).to_string(),
            self.note.clone(),
        ]
    }

    fn decode_fields(fields: &mut FieldReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            id: fields.id()?,
            day_index: fields.int_or(0),
            mood: fields.int_clamped(NEUTRAL_RATING, SCALE_MIN, SCALE_MAX),
            energy: fields.int_clamped(NEUTRAL_RATING, SCALE_MIN, SCALE_MAX),
            note: fields.text(),
        })
    }
}
