//! Annualized return (CAGR) over a price series.

use crate::error::{MetricError, Result};
use crate::{DAYS_PER_YEAR, FIVE_YEAR_WINDOW_DAYS};
use rouen_series::PriceSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compound annual growth rate together with the span it was measured over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualizedReturn {
    /// Annualized growth rate, e.g. `0.08` for 8% per year.
    pub rate: f64,
    /// Span of the underlying series in years (`calendar days / 365`).
    pub years: f64,
}

impl fmt::Display for AnnualizedReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}% per year over {:.1} years",
            self.rate * 100.0,
            self.years
        )
    }
}

/// Compound annual growth rate of a price series.
///
/// For a series spanning `N` calendar days this is
/// `(P_end / P_start)^(365 / N) - 1`, reported with the span `N / 365`.
///
/// # Errors
/// [`MetricError::InsufficientData`] with fewer than two observations,
/// [`MetricError::NonPositiveStart`] when the first close is not a usable
/// base (cannot happen for a validated [`PriceSeries`], kept as an explicit
/// contract).
pub fn annualized_return(prices: &PriceSeries) -> Result<AnnualizedReturn> {
    if prices.len() < 2 {
        return Err(MetricError::InsufficientData {
            needed: 2,
            got: prices.len(),
        });
    }
    let start = prices.first_close();
    if start <= 0.0 {
        return Err(MetricError::NonPositiveStart { value: start });
    }

    let span = prices.span_days() as f64;
    let rate = (prices.last_close() / start).powf(DAYS_PER_YEAR / span) - 1.0;
    Ok(AnnualizedReturn {
        rate,
        years: span / DAYS_PER_YEAR,
    })
}

/// [`annualized_return`] restricted to the trailing five years of data.
///
/// A series shorter than five years is used whole and the actual span is
/// reported. A degenerate window (a single observation inside the last 1825
/// days) falls back to the full range.
pub fn annualized_return_five_years(prices: &PriceSeries) -> Result<AnnualizedReturn> {
    let tail = prices.trailing(FIVE_YEAR_WINDOW_DAYS);
    if tail.len() < 2 {
        annualized_return(prices)
    } else {
        annualized_return(&tail)
    }
}
