//! Routine record.
//!
//! Routines belong to the routine-builder feature; the core only needs their
//! reward-relevant shape. Line layout: `id||name||streak||lastDoneDay||points`.

use crate::clock::DayIndex;
use crate::codec::{DecodeResult, FieldReader, LineRecord};
use crate::model::habit::{decode_day, NEVER_DONE};
use crate::model::{advance_streak, Identified, RecordId, StreakRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub id: RecordId,
    pub name: String,
    pub streak: i64,
    pub last_done_day: Option<DayIndex>,
    pub points: i64,
}

impl Routine {
    pub fn new(id: RecordId, name: impl Into<String>, points: i64) -> Self {
        Self {
            id,
            name: name.into(),
            streak: 0,
            last_done_day: None,
            points,
        }
    }

    pub fn mark_done(&mut self, today: DayIndex) {
        let (streak, last) = advance_streak(self.streak, self.last_done_day, today);
        self.streak = streak;
        self.last_done_day = last;
    }
}

impl Identified for Routine {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl StreakRecord for Routine {
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

impl LineRecord for Routine {
    const SCHEMA: &'static str = "routine";
    const MIN_FIELDS: usize = 5;

    fn encode_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.streak.to_string(),
            self.last_done_day.unwrap_or(NEVER_DONE).to_string(),
            self.points.to_string(),
        ]
    }

    fn decode_fields(fields: &mut FieldReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            id: fields.id()?,
            name: fields.text(),
            streak: fields.int_or(0),
            last_done_day: decode_day(fields.int_or(NEVER_DONE)),
            points: fields.int_or(0),
        })
    }
}
