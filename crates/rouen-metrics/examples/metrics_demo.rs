//! Compute the full metric set over a synthetic price history.
//!
//! Run with: cargo run --example metrics_demo -p rouen-metrics

use chrono::{Duration, NaiveDate};
use rouen_metrics::{
    annualized_return, annualized_return_five_years, max_drawdown, sharpe_and_sortino,
    sharpe_and_sortino_five_years, volatility,
};
use rouen_series::PriceSeries;

fn main() {
    // Six years of weekly observations with drift and a mid-series dip.
    let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
    let mut dates = Vec::new();
    let mut closes = Vec::new();
    for week in 0..312 {
        dates.push(start + Duration::weeks(week));
        let drift = 100.0 * (1.0015_f64).powi(week as i32);
        let dip = if (120..140).contains(&week) { 0.85 } else { 1.0 };
        closes.push(drift * dip);
    }
    let prices = PriceSeries::new(dates, closes).expect("valid fixture");

    let full = annualized_return(&prices).expect("series long enough");
    let recent = annualized_return_five_years(&prices).expect("series long enough");
    println!("annualized return        : {full}");
    println!("annualized return (5y)   : {recent}");

    let vol = volatility(&prices).expect("series long enough");
    println!("daily volatility         : {vol:.6}");

    let ratios = sharpe_and_sortino(&prices).expect("series long enough");
    let ratios_5y = sharpe_and_sortino_five_years(&prices).expect("series long enough");
    println!("risk ratios              : {ratios}");
    println!("risk ratios (5y)         : {ratios_5y}");

    println!("maximum drawdown         : {}", max_drawdown(&prices));
}
