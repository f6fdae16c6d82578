//! Volatility and risk-adjusted return ratios over daily returns.

use crate::error::{MetricError, Result};
use crate::{FIVE_YEAR_WINDOW_DAYS, TRADING_DAYS_PER_YEAR};
use rouen_series::PriceSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sharpe and Sortino ratios computed together from the same daily returns.
///
/// A zero risk-free rate is assumed, both ratios are annualized by √252.
/// An undefined denominator (constant series, no negative returns) is
/// reported as `f64::NAN`, never as a panic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskRatios {
    /// Mean daily return per unit of total volatility, annualized.
    pub sharpe: f64,
    /// Mean daily return per unit of downside volatility, annualized.
    pub sortino: f64,
}

impl fmt::Display for RiskRatios {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sharpe {:.4}, Sortino {:.4}", self.sharpe, self.sortino)
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
pub(crate) fn sample_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = mean(values);
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1.0);
    var.sqrt()
}

/// Sample standard deviation of daily returns.
///
/// # Errors
/// [`MetricError::InsufficientData`] with fewer than two daily returns.
pub fn volatility(prices: &PriceSeries) -> Result<f64> {
    let returns = prices.daily_returns();
    if returns.len() < 2 {
        return Err(MetricError::InsufficientData {
            needed: 3,
            got: prices.len(),
        });
    }
    Ok(sample_std(&returns))
}

/// [`volatility`] restricted to the trailing five years of data, falling back
/// to the full range when the window holds too few observations.
pub fn volatility_five_years(prices: &PriceSeries) -> Result<f64> {
    let tail = prices.trailing(FIVE_YEAR_WINDOW_DAYS);
    if tail.len() < 3 {
        volatility(prices)
    } else {
        volatility(&tail)
    }
}

/// Sharpe and Sortino ratios of a price series.
///
/// Sharpe is `mean(daily) / std(daily) · √252`; Sortino replaces the
/// denominator with the sample standard deviation of the strictly negative
/// daily returns. Fewer than two negative observations leave Sortino
/// undefined (NaN).
///
/// # Errors
/// [`MetricError::InsufficientData`] with fewer than two daily returns.
pub fn sharpe_and_sortino(prices: &PriceSeries) -> Result<RiskRatios> {
    let returns = prices.daily_returns();
    if returns.len() < 2 {
        return Err(MetricError::InsufficientData {
            needed: 3,
            got: prices.len(),
        });
    }

    let annualize = TRADING_DAYS_PER_YEAR.sqrt();
    let mean_return = mean(&returns);

    let std = sample_std(&returns);
    let sharpe = if std > 0.0 {
        mean_return / std * annualize
    } else {
        f64::NAN
    };

    let downside: Vec<f64> = returns.iter().copied().filter(|r| *r < 0.0).collect();
    let sortino = if downside.len() >= 2 {
        let downside_std = sample_std(&downside);
        if downside_std > 0.0 {
            mean_return / downside_std * annualize
        } else {
            f64::NAN
        }
    } else {
        f64::NAN
    };

    Ok(RiskRatios { sharpe, sortino })
}

/// [`sharpe_and_sortino`] restricted to the trailing five years of data,
/// falling back to the full range when the window holds too few observations.
pub fn sharpe_and_sortino_five_years(prices: &PriceSeries) -> Result<RiskRatios> {
    let tail = prices.trailing(FIVE_YEAR_WINDOW_DAYS);
    if tail.len() < 3 {
        sharpe_and_sortino(prices)
    } else {
        sharpe_and_sortino(&tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use chrono::{Duration, NaiveDate};
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(closes: &[f64]) -> PriceSeries {
        let start = date(2024, 1, 1);
        let dates = (0..closes.len())
            .map(|i| start + Duration::days(i as i64))
            .collect();
        PriceSeries::new(dates, closes.to_vec()).unwrap()
    }

    #[test]
    fn test_constant_series_yields_sentinels() {
        let prices = series(&[50.0, 50.0, 50.0, 50.0]);
        assert_abs_diff_eq!(volatility(&prices).unwrap(), 0.0, epsilon = 1e-15);

        let ratios = sharpe_and_sortino(&prices).unwrap();
        assert!(ratios.sharpe.is_nan());
        assert!(ratios.sortino.is_nan());
    }

    #[test]
    fn test_known_volatility() {
        // Returns are +10%, -10%: sample std is known in closed form.
        let prices = series(&[100.0, 110.0, 99.0]);
        let returns = prices.daily_returns();
        let m = (returns[0] + returns[1]) / 2.0;
        let expected = (((returns[0] - m).powi(2) + (returns[1] - m).powi(2)) / 1.0).sqrt();
        assert_relative_eq!(volatility(&prices).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_sharpe_sign_follows_drift() {
        let up = series(&[100.0, 102.0, 101.0, 104.0, 103.0, 107.0]);
        let ratios = sharpe_and_sortino(&up).unwrap();
        assert!(ratios.sharpe > 0.0);
        // Two negative days make the downside deviation defined.
        assert!(ratios.sortino > 0.0);
        // Downside-only deviation can never exceed total deviation here.
        assert!(ratios.sortino >= ratios.sharpe);
    }

    #[test]
    fn test_sortino_undefined_without_negative_days() {
        let prices = series(&[100.0, 101.0, 103.0, 106.0]);
        let ratios = sharpe_and_sortino(&prices).unwrap();
        assert!(ratios.sharpe > 0.0);
        assert!(ratios.sortino.is_nan());
    }

    #[rstest]
    #[case(&[100.0])]
    #[case(&[100.0, 101.0])]
    fn test_too_short_series_errors(#[case] closes: &[f64]) {
        let prices = series(closes);
        assert!(matches!(
            sharpe_and_sortino(&prices),
            Err(MetricError::InsufficientData { .. })
        ));
        assert!(matches!(
            volatility(&prices),
            Err(MetricError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_five_year_variant_equals_full_on_short_series() {
        let prices = series(&[100.0, 102.0, 101.0, 104.0]);
        let full = sharpe_and_sortino(&prices).unwrap();
        let trailing = sharpe_and_sortino_five_years(&prices).unwrap();
        assert_abs_diff_eq!(full.sharpe, trailing.sharpe, epsilon = 1e-12);

        assert_abs_diff_eq!(
            volatility(&prices).unwrap(),
            volatility_five_years(&prices).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_five_year_variant_ignores_old_history() {
        // Volatile decade-old prefix, quiet recent window.
        let last = date(2024, 1, 1);
        let dates = vec![
            last - Duration::days(4000),
            last - Duration::days(3990),
            last - Duration::days(100),
            last - Duration::days(50),
            last,
        ];
        let prices =
            PriceSeries::new(dates, vec![100.0, 300.0, 100.0, 100.0, 100.0]).unwrap();

        let full = volatility(&prices).unwrap();
        let recent = volatility_five_years(&prices).unwrap();
        assert!(recent < full);
        assert_abs_diff_eq!(recent, 0.0, epsilon = 1e-15);
    }
}
