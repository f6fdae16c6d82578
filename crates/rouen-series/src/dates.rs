//! Date conversion helpers for polars `Date` columns.

use chrono::{Duration, NaiveDate};

/// Days since the Unix epoch, the physical representation of a polars `Date`.
pub fn epoch_days(date: NaiveDate) -> i32 {
    (date - NaiveDate::default()).num_days() as i32
}

/// Inverse of [`epoch_days`].
pub fn from_epoch_days(days: i32) -> NaiveDate {
    NaiveDate::default() + Duration::days(i64::from(days))
}
