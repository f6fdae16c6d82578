//! Date-indexed daily adjusted close series.

use crate::dates::epoch_days;
use crate::error::{Result, SeriesError};
use chrono::{Duration, NaiveDate};
use polars::prelude::*;
use serde::Serialize;

/// Daily adjusted close history for one ticker.
///
/// Invariants, enforced at construction: non-empty, strictly increasing
/// unique dates, positive finite closes. All derived computations in the
/// workspace rely on them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    dates: Vec<NaiveDate>,
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Build a price series from parallel date and close vectors.
    pub fn new(dates: Vec<NaiveDate>, closes: Vec<f64>) -> Result<Self> {
        if dates.is_empty() && closes.is_empty() {
            return Err(SeriesError::Empty);
        }
        if dates.len() != closes.len() {
            return Err(SeriesError::LengthMismatch {
                dates: dates.len(),
                values: closes.len(),
            });
        }
        if let Some(position) = dates.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SeriesError::NonMonotonicDates {
                position: position + 1,
            });
        }
        if let Some((date, value)) = dates
            .iter()
            .zip(&closes)
            .find(|(_, v)| !v.is_finite() || **v <= 0.0)
            .map(|(d, v)| (*d, *v))
        {
            return Err(SeriesError::NonPositivePrice { date, value });
        }
        Ok(Self { dates, closes })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the series is empty. Always `false` for a constructed series;
    /// kept for API symmetry with [`crate::DividendSeries`].
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Date index.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Adjusted close values.
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// First date in the index.
    pub fn first_date(&self) -> NaiveDate {
        self.dates[0]
    }

    /// Last date in the index.
    pub fn last_date(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    /// First close.
    pub fn first_close(&self) -> f64 {
        self.closes[0]
    }

    /// Last close.
    pub fn last_close(&self) -> f64 {
        self.closes[self.closes.len() - 1]
    }

    /// Calendar days between the first and last observation.
    pub fn span_days(&self) -> i64 {
        (self.last_date() - self.first_date()).num_days()
    }

    /// Daily percentage change, one entry per consecutive pair of closes.
    pub fn daily_returns(&self) -> Vec<f64> {
        self.closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
    }

    /// Sub-series covering the last `days` calendar days ending at the last
    /// available date. A series shorter than the window is returned whole.
    pub fn trailing(&self, days: i64) -> Self {
        let cutoff = self.last_date() - Duration::days(days);
        let start = self.dates.partition_point(|d| *d < cutoff);
        Self {
            dates: self.dates[start..].to_vec(),
            closes: self.closes[start..].to_vec(),
        }
    }

    /// Drop observations before `date`. Used to align a benchmark index
    /// series to the ticker's own date range.
    pub fn since(&self, date: NaiveDate) -> Result<Self> {
        let start = self.dates.partition_point(|d| *d < date);
        if start == self.dates.len() {
            return Err(SeriesError::Empty);
        }
        Ok(Self {
            dates: self.dates[start..].to_vec(),
            closes: self.closes[start..].to_vec(),
        })
    }

    /// Close prevailing on `date`: the observation at `date` or the nearest
    /// earlier one. `None` when `date` precedes the series.
    pub fn close_on_or_before(&self, date: NaiveDate) -> Option<(NaiveDate, f64)> {
        let idx = self.dates.partition_point(|d| *d <= date);
        if idx == 0 {
            None
        } else {
            Some((self.dates[idx - 1], self.closes[idx - 1]))
        }
    }

    /// Convert to a polars DataFrame with `date` (Date) and `close` columns.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let days: Vec<i32> = self.dates.iter().map(|d| epoch_days(*d)).collect();
        let df = DataFrame::new(vec![
            Series::new("date".into(), days)
                .cast(&DataType::Date)?
                .into(),
            Series::new("close".into(), self.closes.clone()).into(),
        ])?;
        Ok(df)
    }
}
