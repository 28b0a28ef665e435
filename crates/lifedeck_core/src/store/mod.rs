//! Whole-collection record store over one preference slot.
//!
//! # Responsibility
//! - Load a feature collection from its `(namespace, slot_key)` slot.
//! - Persist a full collection back, replacing the slot value.
//!
//! # Invariants
//! - Blank or missing slots load as an empty collection.
//! - Undecodable lines are dropped; every other line still loads.
//! - Load order equals on-disk order; `save` writes in the given order.
//! - Writes are full replacements. There is no incremental write path.

use crate::codec::{decode_line, encode_line, LineRecord};
use crate::model::{Identified, RecordId};
use crate::prefs::{PreferenceArea, PrefsError};
use log::{debug, error, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

/// Separator between encoded records inside one slot.
pub const RECORD_SEPARATOR: &str = "\n";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Prefs {
        namespace: &'static str,
        source: PrefsError,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefs { namespace, source } => {
                write!(f, "store `{namespace}` backend failure: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Prefs { source, .. } => Some(source),
        }
    }
}

/// Location of one collection inside the preference area.
///
/// The slot key carries the schema version (`tasks_v1`); a layout change that
/// older lines cannot default through gets a new key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSlot {
    pub namespace: &'static str,
    pub slot_key: &'static str,
}

/// A line record bound to its persistent slot.
pub trait StoredRecord: LineRecord {
    const SLOT: StoreSlot;
}

/// Result of a load including how many lines were discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport<R> {
    pub records: Vec<R>,
    pub dropped_lines: usize,
}

/// Store for one feature collection.
pub struct RecordStore<'p, R> {
    prefs: &'p dyn PreferenceArea,
    _record: PhantomData<fn() -> R>,
}

impl<'p, R: StoredRecord> RecordStore<'p, R> {
    pub fn new(prefs: &'p dyn PreferenceArea) -> Self {
        Self {
            prefs,
            _record: PhantomData,
        }
    }

    /// Loads the full collection in on-disk order.
    pub fn load(&self) -> StoreResult<Vec<R>> {
        Ok(self.load_report()?.records)
    }

    /// Loads the full collection and counts dropped lines.
    pub fn load_report(&self) -> StoreResult<LoadReport<R>> {
        let slot = R::SLOT;
        let raw = self
            .prefs
            .get_string(slot.namespace, slot.slot_key)
            .map_err(|source| {
                error!(
                    "event=store_load module=store status=error namespace={} error={source}",
                    slot.namespace
                );
                StoreError::Prefs {
                    namespace: slot.namespace,
                    source,
                }
            })?;

        let mut records = Vec::new();
        let mut dropped_lines = 0;
        for (line_no, line) in raw.split(RECORD_SEPARATOR).enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match decode_line::<R>(line) {
                Ok(record) => records.push(record),
                Err(err) => {
                    dropped_lines += 1;
                    warn!(
                        "event=store_decode module=store status=skipped namespace={} line={} reason={err}",
                        slot.namespace,
                        line_no + 1
                    );
                }
            }
        }

        debug!(
            "event=store_load module=store status=ok namespace={} records={} dropped={}",
            slot.namespace,
            records.len(),
            dropped_lines
        );
        Ok(LoadReport {
            records,
            dropped_lines,
        })
    }

    /// Replaces the slot with the given collection.
    pub fn save(&self, records: &[R]) -> StoreResult<()> {
        let slot = R::SLOT;
        let encoded = records
            .iter()
            .map(encode_line)
            .collect::<Vec<_>>()
            .join(RECORD_SEPARATOR);

        self.prefs
            .set_string(slot.namespace, slot.slot_key, &encoded)
            .map_err(|source| {
                error!(
                    "event=store_save module=store status=error namespace={} error={source}",
                    slot.namespace
                );
                StoreError::Prefs {
                    namespace: slot.namespace,
                    source,
                }
            })?;

        debug!(
            "event=store_save module=store status=ok namespace={} records={}",
            slot.namespace,
            records.len()
        );
        Ok(())
    }

    /// Load, mutate, save. The closure result is returned after the save.
    pub fn update<T>(&self, mutate: impl FnOnce(&mut Vec<R>) -> T) -> StoreResult<T> {
        let mut records = self.load()?;
        let outcome = mutate(&mut records);
        self.save(&records)?;
        Ok(outcome)
    }
}

impl<R: StoredRecord + Identified + Clone> RecordStore<'_, R> {
    /// Appends one record at the end of the collection.
    pub fn append(&self, record: R) -> StoreResult<()> {
        self.update(|records| records.push(record))
    }

    /// First record with `id`, if any.
    pub fn find(&self, id: RecordId) -> StoreResult<Option<R>> {
        Ok(self.load()?.into_iter().find(|record| record.id() == id))
    }

    /// Replaces the first record whose id matches, keeping its position.
    ///
    /// Returns `false` (and writes nothing) when no record matches.
    pub fn replace(&self, record: R) -> StoreResult<bool> {
        self.modify(record.id(), |slot| *slot = record)
            .map(|found| found.is_some())
    }

    /// Applies `change` to the first record with `id` and persists.
    ///
    /// Returns the updated record, or `None` without writing when absent.
    pub fn modify(&self, id: RecordId, change: impl FnOnce(&mut R)) -> StoreResult<Option<R>> {
        let mut records = self.load()?;
        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            return Ok(None);
        };
        change(record);
        let updated = record.clone();
        self.save(&records)?;
        Ok(Some(updated))
    }

    /// Removes every record with `id`. Returns how many were removed.
    pub fn remove(&self, id: RecordId) -> StoreResult<usize> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        let removed = before - records.len();
        if removed > 0 {
            self.save(&records)?;
        }
        Ok(removed)
    }
}
