//! Dividend reinvestment simulation.

use chrono::NaiveDate;
use polars::prelude::*;
use rouen_series::dates::epoch_days;
use rouen_series::{DividendSeries, PriceSeries, Result};
use serde::{Deserialize, Serialize};

/// Position state after one reinvestment event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationRow {
    /// Ex-dividend date of the event.
    pub date: NaiveDate,
    /// Dividend paid per share at this event.
    pub dividend_per_share: f64,
    /// Cumulative shares held after reinvesting, monotonically
    /// non-decreasing across rows.
    pub shares: f64,
    /// Cumulative dividend cash reinvested so far.
    pub reinvested: f64,
    /// Position value at the price prevailing on the event date.
    pub value: f64,
}

/// Outcome of replaying a dividend history against a price history.
///
/// Empty rows mean the ticker pays no dividends or the two histories never
/// overlap; callers check [`SimulationResult::is_empty`] before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Ticker the simulation was run for.
    pub ticker: String,
    /// Close at which the initial single share was acquired.
    pub initial_close: f64,
    /// One row per reinvestment event, in date order.
    pub rows: Vec<SimulationRow>,
}

impl SimulationResult {
    /// Number of reinvestment events.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no dividend was ever reinvested.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Shares held after the last event, or the initial single share.
    pub fn final_shares(&self) -> f64 {
        self.rows.last().map_or(1.0, |r| r.shares)
    }

    /// Convert to a polars DataFrame for downstream display.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let days: Vec<i32> = self.rows.iter().map(|r| epoch_days(r.date)).collect();
        let df = DataFrame::new(vec![
            Series::new("date".into(), days)
                .cast(&DataType::Date)?
                .into(),
            Series::new(
                "dividend".into(),
                self.rows
                    .iter()
                    .map(|r| r.dividend_per_share)
                    .collect::<Vec<f64>>(),
            )
            .into(),
            Series::new(
                "shares".into(),
                self.rows.iter().map(|r| r.shares).collect::<Vec<f64>>(),
            )
            .into(),
            Series::new(
                "reinvested".into(),
                self.rows.iter().map(|r| r.reinvested).collect::<Vec<f64>>(),
            )
            .into(),
            Series::new(
                "value".into(),
                self.rows.iter().map(|r| r.value).collect::<Vec<f64>>(),
            )
            .into(),
        ])?;
        Ok(df)
    }
}

/// Replay the dividend history of `ticker`, reinvesting every payout.
///
/// The position starts as a single share bought at the first available close.
/// Each dividend event pays `per-share amount × shares held` and immediately
/// buys additional shares at the close prevailing on the ex-dividend date
/// (the observation at that date or the nearest earlier one). Events outside
/// the price history's date range are skipped; if none remain the result is
/// empty, which is a reported condition, not a failure.
pub fn simulate_reinvestment(
    prices: &PriceSeries,
    dividends: &DividendSeries,
    ticker: &str,
) -> SimulationResult {
    let mut result = SimulationResult {
        ticker: ticker.to_string(),
        initial_close: prices.first_close(),
        rows: Vec::new(),
    };

    let mut shares = 1.0_f64;
    let mut reinvested = 0.0_f64;

    for (date, per_share) in dividends.events() {
        if date < prices.first_date() || date > prices.last_date() {
            continue;
        }
        let Some((_, price)) = prices.close_on_or_before(date) else {
            continue;
        };

        let cash = per_share * shares;
        shares += cash / price;
        reinvested += cash;
        result.rows.push(SimulationRow {
            date,
            dividend_per_share: per_share,
            shares,
            reinvested,
            value: shares * price,
        });
    }

    result
}
