//! Key-value preference area backing every record store.
//!
//! # Responsibility
//! - Provide "get string for key, default empty" and "set string for key,
//!   commit" over `(namespace, slot_key)` pairs.
//!
//! # Invariants
//! - A missing slot reads as the empty string, never as an error.
//! - `set_string` is durable once it returns `Ok`.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryPreferences;
pub use sqlite::SqlitePreferences;

pub type PrefsResult<T> = Result<T, PrefsError>;

#[derive(Debug)]
pub enum PrefsError {
    Db(DbError),
    /// Connection is not at the bootstrap schema version this build expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Backend refused the operation for a non-database reason.
    Unavailable(String),
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "preference connection at schema version {actual_version}, expected {expected_version}"
            ),
            Self::Unavailable(message) => write!(f, "preference area unavailable: {message}"),
        }
    }
}

impl Error for PrefsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for PrefsError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PrefsError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String slots grouped by namespace.
pub trait PreferenceArea {
    /// Returns the slot value, or `""` when the slot was never written.
    fn get_string(&self, namespace: &str, slot_key: &str) -> PrefsResult<String>;

    /// Overwrites the slot value.
    fn set_string(&self, namespace: &str, slot_key: &str, value: &str) -> PrefsResult<()>;
}
