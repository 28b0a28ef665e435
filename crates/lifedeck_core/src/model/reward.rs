//! Reward record. Layout: `id||title||description||targetPoints||isClaimed`.

use crate::codec::{encode_bool, DecodeResult, FieldReader, LineRecord};
use crate::model::{Identified, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub target_points: i64,
    /// Set once by a manual claim and never cleared.
    pub is_claimed: bool,
}

impl Reward {
    pub fn new(id: RecordId, title: impl Into<String>, target_points: i64) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            target_points: target_points.max(0),
            is_claimed: false,
        }
    }

    /// Whether `available` points unlock this reward right now.
    pub fn is_claimable(&self, available: i64) -> bool {
        !self.is_claimed && available >= self.target_points
    }
}

impl Identified for Reward {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl LineRecord for Reward {
    const SCHEMA: &'static str = "reward";
    const MIN_FIELDS: usize = 5;

    fn encode_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.description.clone(),
            self.target_points.to_string(),
            encode_bool(self.is_claimed),
        ]
    }

    fn decode_fields(fields: &mut FieldReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            id: fields.id()?,
            title: fields.text(),
            description: fields.text(),
            target_points: fields.int_or(0),
            is_claimed: fields.bool_or(false),
        })
    }
}
