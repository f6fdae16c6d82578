//! Benchmark ticker set and precomputed normalization anchors.

use serde::{Deserialize, Serialize};

/// Fixed reference set of long-standing dividend payers that scores are
/// normalized against. The list is a constant, not user-supplied.
pub const BENCHMARK_TICKERS: [&str; 10] = [
    "KO", "JNJ", "PG", "XOM", "MMM", "PEP", "CVX", "MCD", "T", "O",
];

/// Whether `ticker` belongs to the benchmark set.
pub fn is_benchmark_ticker(ticker: &str) -> bool {
    BENCHMARK_TICKERS
        .iter()
        .any(|t| t.eq_ignore_ascii_case(ticker))
}

/// Distribution statistics of the benchmark set, used as comparison anchors
/// when scoring a ticker.
///
/// The anchors are computed once over the benchmark tickers' full histories
/// and reused on every call; scoring never fetches benchmark data itself.
/// [`BenchmarkAnchors::default`] carries the precomputed values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkAnchors {
    /// Mean yearly dividend yield across the benchmark set.
    pub mean_yield: f64,
    /// Standard deviation of the yearly yield across the benchmark set.
    pub std_yield: f64,
    /// Mean year-over-year payout growth across the benchmark set.
    pub mean_growth: f64,
    /// Standard deviation of the payout growth across the benchmark set.
    pub std_growth: f64,
}

impl Default for BenchmarkAnchors {
    fn default() -> Self {
        Self {
            mean_yield: 0.032,
            std_yield: 0.011,
            mean_growth: 0.052,
            std_growth: 0.035,
        }
    }
}

impl BenchmarkAnchors {
    /// Build anchors from externally computed statistics, e.g. when the
    /// benchmark histories have been refreshed.
    pub const fn new(mean_yield: f64, std_yield: f64, mean_growth: f64, std_growth: f64) -> Self {
        Self {
            mean_yield,
            std_yield,
            mean_growth,
            std_growth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_set_is_fixed_and_nonempty() {
        assert_eq!(BENCHMARK_TICKERS.len(), 10);
        assert!(is_benchmark_ticker("KO"));
        assert!(is_benchmark_ticker("ko"));
        assert!(!is_benchmark_ticker("ZZZZ"));
    }

    #[test]
    fn test_default_anchors_are_usable() {
        let anchors = BenchmarkAnchors::default();
        assert!(anchors.std_yield > 0.0);
        assert!(anchors.std_growth > 0.0);
        assert!(anchors.mean_yield.is_finite());
        assert!(anchors.mean_growth.is_finite());
    }
}
