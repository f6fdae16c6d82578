//! Input boundary for series data.

use crate::dividend::DividendSeries;
use crate::error::Result;
use crate::price::PriceSeries;

/// Source of price and dividend history for a ticker.
///
/// The computation crates never fetch anything themselves; an external
/// collaborator implements this trait and hands validated series in. How the
/// data is obtained (API, cache, fixture) is the implementor's concern.
pub trait SeriesProvider {
    /// Daily adjusted close history for `ticker`.
    fn price_history(&self, ticker: &str) -> Result<PriceSeries>;

    /// Dividend history for `ticker`. An empty series means the ticker pays
    /// no dividends, not a failure.
    fn dividend_history(&self, ticker: &str) -> Result<DividendSeries>;
}
