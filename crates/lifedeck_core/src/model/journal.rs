//! Journal entry record.
//!
//! Layout: `id||dayIndex||templateCode||isFavorite||title||tags||content`,
//! where `tags` is a comma-joined list.

use crate::clock::DayIndex;
use crate::codec::{encode_bool, encode_list, DecodeResult, FieldReader, LineRecord};
use crate::model::{Identified, RecordId};
use serde::{Deserialize, Serialize};

/// Writing prompt template the entry was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalTemplate {
    Free,
    Gratitude,
    Reflection,
    Morning,
    Evening,
}

impl JournalTemplate {
    pub fn code(self) -> i64 {
        match self {
            Self::Free => 0,
            Self::Gratitude => 1,
            Self::Reflection => 2,
            Self::Morning => 3,
            Self::Evening => 4,
        }
    }

    /// Unknown codes decode as `Free`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Gratitude,
            2 => Self::Reflection,
            3 => Self::Morning,
            4 => Self::Evening,
            _ => Self::Free,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: RecordId,
    pub day_index: DayIndex,
    pub template: JournalTemplate,
    pub is_favorite: bool,
    pub title: String,
    /// Ordered, normalized tags (see `normalize_tags`).
    pub tags: Vec<String>,
    pub content: String,
}

impl JournalEntry {
    pub fn new(id: RecordId, day_index: DayIndex, title: impl Into<String>) -> Self {
        Self {
            id,
            day_index,
            template: JournalTemplate::Free,
            is_favorite: false,
            title: title.into(),
            tags: Vec::new(),
            content: String::new(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        normalize_tag(tag).is_some_and(|tag| self.tags.iter().any(|item| *item == tag))
    }
}

/// Lowercases and trims one tag; separators are replaced by spaces.
/// Returns `None` for blank input.
pub fn normalize_tag(value: &str) -> Option<String> {
    let cleaned = value.replace(',', " ");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Normalizes tags, dropping blanks and later duplicates. Order is kept.
pub fn normalize_tags(values: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(values.len());
    for tag in values.iter().filter_map(|value| normalize_tag(value)) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

impl Identified for JournalEntry {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl LineRecord for JournalEntry {
    const SCHEMA: &'static str = "journal";
    const MIN_FIELDS: usize = 7;

    fn encode_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.day_index.to_string(),
            self.template.code().to_string(),
            encode_bool(self.is_favorite),
            self.title.clone(),
            encode_list(&self.tags),
            self.content.clone(),
        ]
    }

    fn decode_fields(fields: &mut FieldReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            id: fields.id()?,
            day_index: fields.int_or(0),
            template: JournalTemplate::from_code(fields.int_or(0)),
            is_favorite: fields.bool_or(false),
            title: fields.text(),
            tags: fields.list(),
            content: fields.text(),
        })
    }
}
