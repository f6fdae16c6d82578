//! Date-indexed dividend cash amounts on ex-dividend dates.

use crate::dates::epoch_days;
use crate::error::{Result, SeriesError};
use chrono::{Duration, NaiveDate};
use polars::prelude::*;
use serde::Serialize;

/// Dividend cash amounts paid on ex-dividend dates for one ticker.
///
/// Unlike [`crate::PriceSeries`], the series may be empty: a ticker that pays
/// no dividends is a normal, recoverable condition throughout the workspace.
/// Invariants: strictly increasing unique dates, non-negative finite amounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DividendSeries {
    dates: Vec<NaiveDate>,
    amounts: Vec<f64>,
}

impl DividendSeries {
    /// Build a dividend series from parallel date and amount vectors.
    pub fn new(dates: Vec<NaiveDate>, amounts: Vec<f64>) -> Result<Self> {
        if dates.len() != amounts.len() {
            return Err(SeriesError::LengthMismatch {
                dates: dates.len(),
                values: amounts.len(),
            });
        }
        if let Some(position) = dates.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SeriesError::NonMonotonicDates {
                position: position + 1,
            });
        }
        if let Some((date, value)) = dates
            .iter()
            .zip(&amounts)
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
            .map(|(d, v)| (*d, *v))
        {
            return Err(SeriesError::NegativeDividend { date, value });
        }
        Ok(Self { dates, amounts })
    }

    /// An empty dividend history.
    pub const fn empty() -> Self {
        Self {
            dates: Vec::new(),
            amounts: Vec::new(),
        }
    }

    /// Number of dividend events.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the ticker has no dividend history.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Ex-dividend dates.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Cash amounts per share.
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// First ex-dividend date, if any.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// Last ex-dividend date, if any.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Total cash paid over the whole history.
    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }

    /// Iterate over `(ex-date, amount)` events in date order.
    pub fn events(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.amounts.iter().copied())
    }

    /// Sub-series covering the last `days` calendar days ending at the last
    /// event. An empty or shorter series is returned whole.
    pub fn trailing(&self, days: i64) -> Self {
        let Some(last) = self.last_date() else {
            return Self::empty();
        };
        let cutoff = last - Duration::days(days);
        let start = self.dates.partition_point(|d| *d < cutoff);
        Self {
            dates: self.dates[start..].to_vec(),
            amounts: self.amounts[start..].to_vec(),
        }
    }

    /// Convert to a polars DataFrame with `date` (Date) and `dividend` columns.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let days: Vec<i32> = self.dates.iter().map(|d| epoch_days(*d)).collect();
        let df = DataFrame::new(vec![
            Series::new("date".into(), days)
                .cast(&DataType::Date)?
                .into(),
            Series::new("dividend".into(), self.amounts.clone()).into(),
        ])?;
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_is_allowed() {
        let series = DividendSeries::new(vec![], vec![]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.total(), 0.0);
        assert_eq!(series.first_date(), None);
        assert!(series.trailing(1825).is_empty());
    }

    #[test]
    fn test_rejects_negative_amount() {
        let err = DividendSeries::new(vec![date(2024, 3, 1)], vec![-0.5]).unwrap_err();
        assert!(matches!(err, SeriesError::NegativeDividend { .. }));
    }

    #[test]
    fn test_rejects_unsorted_dates() {
        let err = DividendSeries::new(
            vec![date(2024, 6, 1), date(2024, 3, 1)],
            vec![0.5, 0.5],
        )
        .unwrap_err();
        assert!(matches!(err, SeriesError::NonMonotonicDates { .. }));
    }

    #[test]
    fn test_zero_amount_is_allowed() {
        // A zero payout is odd but not invalid.
        let series = DividendSeries::new(vec![date(2024, 3, 1)], vec![0.0]).unwrap();
        assert_eq!(series.total(), 0.0);
    }

    #[test]
    fn test_trailing_window() {
        let series = DividendSeries::new(
            vec![date(2018, 3, 1), date(2023, 3, 1), date(2024, 3, 1)],
            vec![1.0, 2.0, 3.0],
        )
        .unwrap();
        let tail = series.trailing(1825);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail.first_date(), Some(date(2023, 3, 1)));
    }

    #[test]
    fn test_events_order() {
        let series = DividendSeries::new(
            vec![date(2024, 3, 1), date(2024, 6, 1)],
            vec![0.5, 0.6],
        )
        .unwrap();
        let events: Vec<_> = series.events().collect();
        assert_eq!(events, vec![(date(2024, 3, 1), 0.5), (date(2024, 6, 1), 0.6)]);
    }
}
