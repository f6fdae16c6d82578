#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/rouen-quant/rouen/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dates;
pub mod dividend;
pub mod error;
pub mod price;
pub mod provider;
pub mod yearly;

pub use dividend::DividendSeries;
pub use error::{Result, SeriesError};
pub use price::PriceSeries;
pub use provider::SeriesProvider;
pub use yearly::YearlyAggregate;

/// Calendar days in the trailing five-year window used by the `*_five_years`
/// metric variants.
pub const FIVE_YEAR_WINDOW_DAYS: i64 = 1825;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
