//! SQLite-backed preference area.
//!
//! # Invariants
//! - Construction requires a connection bootstrapped by `db::open_db*`.
//! - Each `set_string` is a single upsert statement (autocommit).

use super::{PreferenceArea, PrefsError, PrefsResult};
use crate::db::migrations::{current_user_version, latest_version};
use rusqlite::{params, Connection, OptionalExtension};

pub struct SqlitePreferences<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferences<'conn> {
    /// Wraps a bootstrapped connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    pub fn try_new(conn: &'conn Connection) -> PrefsResult<Self> {
        let actual_version = current_user_version(conn)?;
        let expected_version = latest_version();
        if actual_version < expected_version {
            return Err(PrefsError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl PreferenceArea for SqlitePreferences<'_> {
    fn get_string(&self, namespace: &str, slot_key: &str) -> PrefsResult<String> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE namespace = ?1 AND slot_key = ?2;",
                params![namespace, slot_key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value.unwrap_or_default())
    }

    fn set_string(&self, namespace: &str, slot_key: &str, value: &str) -> PrefsResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (namespace, slot_key, value, updated_at)
             VALUES (?1, ?2, ?3, (strftime('%s', 'now') * 1000))
             ON CONFLICT(namespace, slot_key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![namespace, slot_key, value],
        )?;
        Ok(())
    }
}
