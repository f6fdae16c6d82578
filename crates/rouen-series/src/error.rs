//! Error types for series construction and aggregation.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;

/// Errors that can occur when building or aggregating series.
///
/// Constructor errors indicate a violated caller contract (malformed input
/// tables); insufficient-data conditions are not represented here, they are
/// reported as empty or NaN results by the computations themselves.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// Series has no observations where at least one is required
    #[error("series is empty")]
    Empty,

    /// Date and value columns have different lengths
    #[error("series length mismatch: {dates} dates vs {values} values")]
    LengthMismatch {
        /// Number of dates supplied
        dates: usize,
        /// Number of values supplied
        values: usize,
    },

    /// Date index is not strictly increasing
    #[error("date index is not strictly increasing at position {position}")]
    NonMonotonicDates {
        /// Index of the first out-of-order date
        position: usize,
    },

    /// Close price is zero, negative, or not finite
    #[error("non-positive or non-finite close {value} on {date}")]
    NonPositivePrice {
        /// Date of the offending observation
        date: NaiveDate,
        /// Offending value
        value: f64,
    },

    /// Dividend amount is negative or not finite
    #[error("negative or non-finite dividend {value} on {date}")]
    NegativeDividend {
        /// Date of the offending observation
        date: NaiveDate,
        /// Offending value
        value: f64,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
