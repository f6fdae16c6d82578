//! Error types for metric computations.

use thiserror::Error;

/// Result type for metric computations.
pub type Result<T> = std::result::Result<T, MetricError>;

/// Errors that can occur when computing a metric.
#[derive(Debug, Error, PartialEq)]
pub enum MetricError {
    /// Series is too short for the metric to be defined
    #[error("insufficient data: need at least {needed} observations, got {got}")]
    InsufficientData {
        /// Minimum number of observations required
        needed: usize,
        /// Number of observations supplied
        got: usize,
    },

    /// First close is not a usable base for a growth rate
    #[error("non-positive starting price {value}")]
    NonPositiveStart {
        /// Offending starting value
        value: f64,
    },
}
