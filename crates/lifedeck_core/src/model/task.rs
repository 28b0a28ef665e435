//! Task record.
//!
//! Line layout: `id||title||description||done||date||points`.
//! `points` was appended after the first layout and defaults to 0.

use crate::codec::{encode_bool, DecodeResult, FieldReader, LineRecord};
use crate::model::{Identified, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub done: bool,
    /// Free-form due date, usually `YYYY-MM-DD`. Empty when unset.
    pub date: String,
    /// Reward points credited while the task is done.
    pub points: i64,
}

impl Task {
    /// Creates an open task.
    pub fn new(id: RecordId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            done: false,
            date: String::new(),
            points: 0,
        }
    }

    pub fn with_points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    /// Copy with `done` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }
}

impl Identified for Task {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl LineRecord for Task {
    const SCHEMA: &'static str = "task";
    const MIN_FIELDS: usize = 5;

    fn encode_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.description.clone(),
            encode_bool(self.done),
            self.date.clone(),
            self.points.to_string(),
        ]
    }

    fn decode_fields(fields: &mut FieldReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            id: fields.id()?,
            title: fields.text(),
            description: fields.text(),
            done: fields.bool_or(false),
            date: fields.text(),
            points: fields.int_or(0),
        })
    }
}
