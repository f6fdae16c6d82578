#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/rouen-quant/rouen/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod report;

// Re-export sub-crates under stable module names
pub use rouen_dividend as dividend;
pub use rouen_metrics as metrics;
pub use rouen_series as series;

pub use report::TickerReport;

// Re-export the common types at the crate root
pub use rouen_dividend::{
    BENCHMARK_TICKERS, BenchmarkAnchors, DividendScorer, DividendScores, ScoreReport,
    SimulationResult, simulate_reinvestment,
};
pub use rouen_metrics::{AnnualizedReturn, MaxDrawdown, MetricError, RiskRatios};
pub use rouen_series::{
    DividendSeries, FIVE_YEAR_WINDOW_DAYS, PriceSeries, SeriesError, SeriesProvider,
    YearlyAggregate,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
