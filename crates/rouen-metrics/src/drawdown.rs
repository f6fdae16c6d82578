//! Maximum drawdown over a price series.

use chrono::NaiveDate;
use rouen_series::PriceSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deepest peak-to-trough decline of a price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxDrawdown {
    /// Depth as a non-positive fraction, e.g. `-0.25` for a 25% decline.
    pub depth: f64,
    /// Date of the peak preceding the decline.
    pub peak: NaiveDate,
    /// Date of the trough.
    pub trough: NaiveDate,
}

impl fmt::Display for MaxDrawdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}% from {} to {}",
            self.depth * 100.0,
            self.peak,
            self.trough
        )
    }
}

/// Deepest decline from a running peak. A series that never declines (or a
/// single observation) reports a depth of zero with peak and trough on the
/// first date.
pub fn max_drawdown(prices: &PriceSeries) -> MaxDrawdown {
    let dates = prices.dates();
    let closes = prices.closes();

    let mut peak = closes[0];
    let mut peak_date = dates[0];
    let mut worst = MaxDrawdown {
        depth: 0.0,
        peak: peak_date,
        trough: peak_date,
    };

    for (date, close) in dates.iter().zip(closes).skip(1) {
        if *close > peak {
            peak = *close;
            peak_date = *date;
            continue;
        }
        let depth = close / peak - 1.0;
        if depth < worst.depth {
            worst = MaxDrawdown {
                depth,
                peak: peak_date,
                trough: *date,
            };
        }
    }

    worst
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::Duration;

    fn series(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dates = (0..closes.len())
            .map(|i| start + Duration::days(i as i64))
            .collect();
        PriceSeries::new(dates, closes.to_vec()).unwrap()
    }

    #[test]
    fn test_monotone_up_has_zero_drawdown() {
        let dd = max_drawdown(&series(&[100.0, 105.0, 111.0, 120.0]));
        assert_abs_diff_eq!(dd.depth, 0.0, epsilon = 1e-15);
        assert_eq!(dd.peak, dd.trough);
    }

    #[test]
    fn test_single_observation() {
        let dd = max_drawdown(&series(&[100.0]));
        assert_abs_diff_eq!(dd.depth, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_single_dip_closed_form() {
        // Peak 120 on day 1, trough 90 on day 3: depth -25%.
        let dd = max_drawdown(&series(&[100.0, 120.0, 100.0, 90.0, 130.0]));
        assert_abs_diff_eq!(dd.depth, -0.25, epsilon = 1e-12);
        assert_eq!(dd.peak, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(dd.trough, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
    }

    #[test]
    fn test_picks_deepest_of_two_dips() {
        // First dip -10%, second dip -20% from a later, higher peak.
        let dd = max_drawdown(&series(&[100.0, 90.0, 150.0, 120.0, 160.0]));
        assert_abs_diff_eq!(dd.depth, -0.20, epsilon = 1e-12);
        assert_eq!(dd.peak, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }
}
