//! Schema steps for the preference database file.
//!
//! The file holds a single `preferences` table. Record layouts change inside
//! slot values (`tasks_v1` -> `tasks_v2`), so steps here only touch the table
//! itself.
//!
//! # Invariants
//! - Step versions start at 1 and increase by one.
//! - All pending steps commit together with the final `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::debug;
use rusqlite::Connection;

/// `(user_version after the step, SQL of the step)`.
const STEPS: &[(u32, &str)] = &[(1, include_str!("0001_preferences.sql"))];

/// Highest `user_version` this build can produce.
pub fn latest_version() -> u32 {
    STEPS.last().map_or(0, |(version, _)| *version)
}

/// Brings the preference table up to `latest_version()`.
///
/// Returns how many steps ran; an up-to-date file runs none.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when a newer build already touched the file.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<usize> {
    let from = current_user_version(conn)?;
    let to = latest_version();
    if from > to {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: to,
        });
    }

    let pending: Vec<&(u32, &str)> = STEPS
        .iter()
        .filter(|(version, _)| *version > from)
        .collect();
    if pending.is_empty() {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    for (_, sql) in &pending {
        tx.execute_batch(sql)?;
    }
    tx.pragma_update(None, "user_version", to)?;
    tx.commit()?;

    debug!(
        "event=db_migrate module=db status=ok from={from} to={to} steps={}",
        pending.len()
    );
    Ok(pending.len())
}

pub(crate) fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?;
    Ok(version)
}
