//! Dividend quality scoring against the benchmark anchors.

use crate::benchmark::BenchmarkAnchors;
use rouen_series::{DividendSeries, FIVE_YEAR_WINDOW_DAYS, PriceSeries, Result, YearlyAggregate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized component scores plus their composite.
///
/// `yield_score` and `payout_growth_score` are z-scores against the benchmark
/// anchors clamped to ±3 and mapped onto `[0, 1]`; `consistency_score` is the
/// fraction of year-over-year dividend increases and is already in `[0, 1]`.
/// A component that cannot be computed (no dividend history, a single merged
/// year) is NaN; the composite averages the finite components only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividendScores {
    /// Mean yearly yield relative to the benchmark set.
    pub yield_score: f64,
    /// Mean year-over-year payout growth relative to the benchmark set.
    pub payout_growth_score: f64,
    /// Fraction of years with an increased payout.
    pub consistency_score: f64,
    /// Mean of the finite component scores.
    pub composite: f64,
}

impl DividendScores {
    /// All-NaN scores for a ticker without usable dividend history.
    pub const fn undefined() -> Self {
        Self {
            yield_score: f64::NAN,
            payout_growth_score: f64::NAN,
            consistency_score: f64::NAN,
            composite: f64::NAN,
        }
    }

    /// Metric-name to score mapping for downstream display.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("yield".to_string(), self.yield_score),
            ("payout_growth".to_string(), self.payout_growth_score),
            ("consistency".to_string(), self.consistency_score),
            ("composite".to_string(), self.composite),
        ])
    }
}

/// Scores together with the merged yearly dividend/price table they were
/// derived from, kept for downstream display.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    /// Component and composite scores.
    pub scores: DividendScores,
    /// Merged yearly dividend totals, prices and yields.
    pub yearly: YearlyAggregate,
}

/// Scores a dividend history against a price history using fixed benchmark
/// anchors.
#[derive(Debug, Clone)]
pub struct DividendScorer {
    anchors: BenchmarkAnchors,
    trailing_five_years: bool,
}

impl DividendScorer {
    /// Create a scorer over the full available history.
    pub const fn new(anchors: BenchmarkAnchors) -> Self {
        Self {
            anchors,
            trailing_five_years: false,
        }
    }

    /// Restrict scoring to the trailing five years of both series.
    pub const fn trailing_five_years(mut self, on: bool) -> Self {
        self.trailing_five_years = on;
        self
    }

    /// Score `dividends` against `prices`.
    ///
    /// An empty dividend history, or one whose years never overlap the price
    /// history, yields all-NaN scores and an empty table rather than an
    /// error.
    pub fn score(&self, prices: &PriceSeries, dividends: &DividendSeries) -> Result<ScoreReport> {
        let yearly = if self.trailing_five_years {
            YearlyAggregate::from_series(
                &prices.trailing(FIVE_YEAR_WINDOW_DAYS),
                &dividends.trailing(FIVE_YEAR_WINDOW_DAYS),
            )?
        } else {
            YearlyAggregate::from_series(prices, dividends)?
        };

        if yearly.is_empty() {
            return Ok(ScoreReport {
                scores: DividendScores::undefined(),
                yearly,
            });
        }

        let mean_yield = yearly.mean_yield()?.unwrap_or(f64::NAN);
        let growth = yearly.dividend_growth()?;
        let mean_growth = finite_mean(&growth);

        let yield_score = normalize(mean_yield, self.anchors.mean_yield, self.anchors.std_yield);
        let payout_growth_score =
            normalize(mean_growth, self.anchors.mean_growth, self.anchors.std_growth);
        let consistency_score = consistency(&yearly.dividends()?);

        let composite = finite_mean(&[yield_score, payout_growth_score, consistency_score]);

        Ok(ScoreReport {
            scores: DividendScores {
                yield_score,
                payout_growth_score,
                consistency_score,
                composite,
            },
            yearly,
        })
    }
}

/// Fraction of year-over-year payout increases; NaN with fewer than two
/// merged years.
fn consistency(yearly_dividends: &[f64]) -> f64 {
    if yearly_dividends.len() < 2 {
        return f64::NAN;
    }
    let increases = yearly_dividends.windows(2).filter(|w| w[1] > w[0]).count();
    increases as f64 / (yearly_dividends.len() - 1) as f64
}

/// Z-score against the anchor distribution, clamped to ±3 and mapped onto
/// `[0, 1]`. NaN input or a degenerate anchor spread stays NaN.
fn normalize(value: f64, anchor_mean: f64, anchor_std: f64) -> f64 {
    if !value.is_finite() || anchor_std <= 0.0 {
        return f64::NAN;
    }
    let z = ((value - anchor_mean) / anchor_std).clamp(-3.0, 3.0);
    (z + 3.0) / 6.0
}

/// Mean of the finite entries; NaN when none are finite.
fn finite_mean(values: &[f64]) -> f64 {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return f64::NAN;
    }
    finite.iter().sum::<f64>() / finite.len() as f64
}
