#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/rouen-quant/rouen/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod benchmark;
pub mod score;
pub mod simulation;

pub use benchmark::{BENCHMARK_TICKERS, BenchmarkAnchors, is_benchmark_ticker};
pub use score::{DividendScorer, DividendScores, ScoreReport};
pub use simulation::{SimulationResult, SimulationRow, simulate_reinvestment};

// Scoring and simulation report failures through the shared series error.
pub use rouen_series::{Result, SeriesError};
