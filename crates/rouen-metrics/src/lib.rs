#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/rouen-quant/rouen/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod drawdown;
pub mod error;
pub mod ratios;
pub mod returns;

pub use drawdown::{MaxDrawdown, max_drawdown};
pub use error::{MetricError, Result};
pub use ratios::{
    RiskRatios, sharpe_and_sortino, sharpe_and_sortino_five_years, volatility,
    volatility_five_years,
};
pub use returns::{AnnualizedReturn, annualized_return, annualized_return_five_years};

// Re-export the shared trailing window length.
pub use rouen_series::FIVE_YEAR_WINDOW_DAYS;

/// Calendar days per year used by the CAGR formula.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Trading days per year used to annualize daily ratios.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
