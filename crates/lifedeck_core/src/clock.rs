//! Day-index clock and rolling-window helpers.
//!
//! # Responsibility
//! - Convert epoch milliseconds into integer day buckets.
//! - Build ascending day windows and per-bucket chart series.
//!
//! # Invariants
//! - `day_index = floor(epoch_ms / 86_400_000)` (UTC buckets).
//! - Windows are ascending, consecutive, and end at the reference day.
//! - Series aggregate across every record in a bucket; several records may
//!   share one day index.

use chrono::{DateTime, NaiveDate};
use std::sync::atomic::{AtomicI64, Ordering};

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Integer calendar-day bucket.
pub type DayIndex = i64;

/// Source of wall-clock time in epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;

    /// Day bucket containing `now_millis()`.
    fn today_index(&self) -> DayIndex {
        day_index_from_millis(self.now_millis())
    }
}

/// Real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Settable clock for tests and replay.
#[derive(Debug, Default)]
pub struct FixedClock {
    millis: AtomicI64,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    /// Clock positioned at the start of `day`.
    pub fn at_day(day: DayIndex) -> Self {
        Self::new(day * MILLIS_PER_DAY)
    }

    pub fn set_millis(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    pub fn advance_millis(&self, delta: i64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

pub fn day_index_from_millis(epoch_ms: i64) -> DayIndex {
    epoch_ms.div_euclid(MILLIS_PER_DAY)
}

/// Returns `[today - (n - 1) ..= today]`, ascending. `n == 0` yields nothing.
pub fn last_n_days(today: DayIndex, n: usize) -> Vec<DayIndex> {
    let span = n as i64;
    ((today - span + 1)..=today).collect()
}

/// Human label for `day` relative to `today`.
///
/// `0 -> "today"`, `1 -> "yesterday"`, `k -> "k days ago"`. Future days read
/// as `"in k days"`.
pub fn relative_day_label(today: DayIndex, day: DayIndex) -> String {
    match today - day {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        diff if diff < 0 => format!("in {} days", -diff),
        diff => format!("{diff} days ago"),
    }
}

/// Sums `value_of` over every item whose day falls in each window bucket.
///
/// Bucket sums saturate at the `i64` bounds.
pub fn sum_by_day<T>(
    window: &[DayIndex],
    items: &[T],
    day_of: impl Fn(&T) -> DayIndex,
    value_of: impl Fn(&T) -> i64,
) -> Vec<i64> {
    window
        .iter()
        .map(|day| {
            items
                .iter()
                .filter(|item| day_of(*item) == *day)
                .map(&value_of)
                .fold(0, i64::saturating_add)
        })
        .collect()
}

/// Counts items per window bucket.
pub fn count_by_day<T>(
    window: &[DayIndex],
    items: &[T],
    day_of: impl Fn(&T) -> DayIndex,
) -> Vec<i64> {
    sum_by_day(window, items, day_of, |_| 1)
}

/// Calendar date (UTC) of a day bucket.
pub fn day_index_to_date(day: DayIndex) -> Option<NaiveDate> {
    let millis = day.checked_mul(MILLIS_PER_DAY)?;
    DateTime::from_timestamp_millis(millis).map(|moment| moment.date_naive())
}

pub fn date_to_day_index(date: NaiveDate) -> DayIndex {
    let midnight = date.and_time(chrono::NaiveTime::MIN).and_utc();
    day_index_from_millis(midnight.timestamp_millis())
}

/// Parses a `YYYY-MM-DD` date string into its day bucket.
pub fn parse_date_day_index(value: &str) -> Option<DayIndex> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .map(date_to_day_index)
}

#[cfg(test)]
mod tests {
    use super::{
        count_by_day, day_index_from_millis, last_n_days, relative_day_label, sum_by_day,
        MILLIS_PER_DAY,
    };

    #[test]
    fn day_index_floors_partial_days() {
        assert_eq!(day_index_from_millis(0), 0);
        assert_eq!(day_index_from_millis(MILLIS_PER_DAY - 1), 0);
        assert_eq!(day_index_from_millis(MILLIS_PER_DAY), 1);
        assert_eq!(day_index_from_millis(-1), -1);
    }

    #[test]
    fn zero_day_window_is_empty() {
        assert!(last_n_days(100, 0).is_empty());
        assert_eq!(last_n_days(100, 1), vec![100]);
    }

    #[test]
    fn labels_follow_distance() {
        assert_eq!(relative_day_label(10, 10), "today");
        assert_eq!(relative_day_label(10, 9), "yesterday");
        assert_eq!(relative_day_label(10, 6), "4 days ago");
        assert_eq!(relative_day_label(10, 12), "in 2 days");
    }

    #[test]
    fn series_sum_and_count_every_match_in_bucket() {
        let items = [(5_i64, 10_i64), (5, 20), (7, 1)];
        let window = [5, 6, 7];
        assert_eq!(
            sum_by_day(&window, &items, |item| item.0, |item| item.1),
            vec![30, 0, 1]
        );
        assert_eq!(count_by_day(&window, &items, |item| item.0), vec![2, 0, 1]);
    }
}
