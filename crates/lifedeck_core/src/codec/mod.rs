//! Flat-text record codec.
//!
//! # Responsibility
//! - Map one typed record to one `||`-delimited text line and back.
//! - Keep record separators (newlines) out of encoded fields.
//!
//! # Invariants
//! - `decode_line(encode_line(r)) == r` when no field contains a newline or
//!   the separator sequence.
//! - A line with fewer fields than the schema minimum is a `DecodeError`.
//! - Non-core fields never fail a decode; they fall back to per-field defaults.
//!
//! Fields are not escaped. Text that itself contains `||`, or that ends with a
//! single `|` (which then merges with the following separator), decodes with
//! misaligned columns.

use crate::model::RecordId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Column separator between encoded fields.
pub const FIELD_SEPARATOR: &str = "||";
/// Item separator for list-valued fields (journal tags).
pub const LIST_SEPARATOR: &str = ",";

static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|[\r\n]").expect("valid line break regex"));

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Line-level decode failure. The offending line is skipped by stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    TooFewFields {
        schema: &'static str,
        expected: usize,
        found: usize,
    },
    InvalidId {
        schema: &'static str,
        value: String,
    },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewFields {
                schema,
                expected,
                found,
            } => write!(
                f,
                "{schema} line has {found} fields, expected at least {expected}"
            ),
            Self::InvalidId { schema, value } => {
                write!(f, "{schema} line has invalid id `{value}`")
            }
        }
    }
}

impl Error for DecodeError {}

/// A record type with a fixed positional line layout.
pub trait LineRecord: Sized {
    /// Schema name used in diagnostics.
    const SCHEMA: &'static str;
    /// Minimum number of fields a line must carry to be decodable.
    const MIN_FIELDS: usize;

    /// Returns fields in schema order, not yet sanitized.
    fn encode_fields(&self) -> Vec<String>;

    /// Reads fields in schema order.
    fn decode_fields(fields: &mut FieldReader<'_>) -> DecodeResult<Self>;
}

/// Encodes one record as a single line.
pub fn encode_line<R: LineRecord>(record: &R) -> String {
    record
        .encode_fields()
        .iter()
        .map(|field| sanitize_field(field))
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

/// Decodes one line into a record.
///
/// # Errors
/// - `TooFewFields` when the split yields fewer than `R::MIN_FIELDS` columns.
/// - `InvalidId` when the leading id column is not an integer.
pub fn decode_line<R: LineRecord>(line: &str) -> DecodeResult<R> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < R::MIN_FIELDS {
        return Err(DecodeError::TooFewFields {
            schema: R::SCHEMA,
            expected: R::MIN_FIELDS,
            found: fields.len(),
        });
    }

    let mut reader = FieldReader::new(R::SCHEMA, fields);
    R::decode_fields(&mut reader)
}

/// Replaces every line break sequence with a single space.
pub fn sanitize_field(value: &str) -> Cow<'_, str> {
    LINE_BREAK_RE.replace_all(value, " ")
}

pub fn encode_bool(value: bool) -> String {
    let text = if value { "true" } else { "false" };
    text.to_string()
}

pub fn encode_optional_id(value: Option<RecordId>) -> String {
    value.map(|id| id.to_string()).unwrap_or_default()
}

/// Joins list items with `,`. Items containing `,` split on decode.
pub fn encode_list(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}

/// Sequential cursor over the columns of one line.
///
/// Reads past the end yield the same defaults as unparsable values, which is
/// how trailing fields added after a schema was first persisted get filled.
pub struct FieldReader<'a> {
    schema: &'static str,
    fields: Vec<&'a str>,
    position: usize,
}

impl<'a> FieldReader<'a> {
    fn new(schema: &'static str, fields: Vec<&'a str>) -> Self {
        Self {
            schema,
            fields,
            position: 0,
        }
    }

    fn next_raw(&mut self) -> Option<&'a str> {
        let value = self.fields.get(self.position).copied();
        self.position += 1;
        value
    }

    /// Reads the core id column. Fails the whole line when unparsable.
    pub fn id(&mut self) -> DecodeResult<RecordId> {
        let raw = self.next_raw().unwrap_or_default();
        raw.trim()
            .parse::<RecordId>()
            .map_err(|_| DecodeError::InvalidId {
                schema: self.schema,
                value: raw.to_string(),
            })
    }

    pub fn text(&mut self) -> String {
        self.next_raw().unwrap_or_default().to_string()
    }

    pub fn int_or(&mut self, default: i64) -> i64 {
        self.next_raw()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(default)
    }

    /// Reads an integer and clamps it into `min..=max`.
    pub fn int_clamped(&mut self, default: i64, min: i64, max: i64) -> i64 {
        self.int_or(default).clamp(min, max)
    }

    /// `true`/`1` decode as true; any other present value is false.
    pub fn bool_or(&mut self, default: bool) -> bool {
        match self.next_raw().map(str::trim) {
            Some(raw) => matches!(raw, "true" | "1"),
            None => default,
        }
    }

    /// Empty or unparsable values decode as `None`.
    pub fn optional_id(&mut self) -> Option<RecordId> {
        self.next_raw()
            .and_then(|raw| raw.trim().parse::<RecordId>().ok())
    }

    pub fn list(&mut self) -> Vec<String> {
        self.next_raw()
            .unwrap_or_default()
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        decode_line, encode_line, sanitize_field, DecodeError, DecodeResult, FieldReader,
        LineRecord,
    };

    #[derive(Debug, PartialEq)]
    struct Sample {
        id: i64,
        label: String,
        count: i64,
        flag: bool,
    }

    impl LineRecord for Sample {
        const SCHEMA: &'static str = "sample";
        const MIN_FIELDS: usize = 3;

        fn encode_fields(&self) -> Vec<String> {
            vec![
                self.id.to_string(),
                self.label.clone(),
                self.count.to_string(),
                super::encode_bool(self.flag),
            ]
        }

        fn decode_fields(fields: &mut FieldReader<'_>) -> DecodeResult<Self> {
            Ok(Self {
                id: fields.id()?,
                label: fields.text(),
                count: fields.int_or(7),
                flag: fields.bool_or(true),
            })
        }
    }

    #[test]
    fn sanitize_field_collapses_each_line_break_to_one_space() {
        assert_eq!(sanitize_field("a\r\nb\nc\rd"), "a b c d");
        assert_eq!(sanitize_field("plain"), "plain");
    }

    #[test]
    fn encode_line_replaces_newlines_inside_fields() {
        let sample = Sample {
            id: 1,
            label: "two\nlines".to_string(),
            count: 3,
            flag: false,
        };
        assert_eq!(encode_line(&sample), "1||two lines||3||false");
    }

    #[test]
    fn unparsable_numeric_field_uses_default() {
        let sample: Sample = decode_line("5||x||not-a-number||true").unwrap();
        assert_eq!(sample.count, 7);
        assert!(sample.flag);
    }

    #[test]
    fn missing_trailing_field_uses_default() {
        let sample: Sample = decode_line("5||x||2").unwrap();
        assert!(sample.flag);
    }

    #[test]
    fn short_line_is_rejected() {
        let err = decode_line::<Sample>("5||x").unwrap_err();
        assert_eq!(
            err,
            DecodeError::TooFewFields {
                schema: "sample",
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn invalid_id_is_rejected() {
        let err = decode_line::<Sample>("abc||x||1").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidId { .. }));
    }

    #[test]
    fn separator_inside_text_misaligns_columns() {
        let sample = Sample {
            id: 9,
            label: "a||b".to_string(),
            count: 4,
            flag: false,
        };
        let decoded: Sample = decode_line(&encode_line(&sample)).unwrap();
        assert_ne!(decoded, sample);
        assert_eq!(decoded.label, "a");

        let trailing_pipe = Sample {
            id: 9,
            label: "a|".to_string(),
            count: 4,
            flag: false,
        };
        let line = encode_line(&trailing_pipe);
        assert_eq!(line, "9||a|||4||false");
        let decoded: Sample = decode_line(&line).unwrap();
        assert_eq!(decoded.label, "a");
        assert_ne!(decoded, trailing_pipe);
    }
}
