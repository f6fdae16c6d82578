//! Score a synthetic dividend payer and replay its payout history.
//!
//! Run with: cargo run --example reinvestment_demo -p rouen-dividend

use chrono::{Duration, NaiveDate};
use rouen_dividend::{BenchmarkAnchors, DividendScorer, simulate_reinvestment};
use rouen_series::{DividendSeries, PriceSeries};

fn main() {
    let start = NaiveDate::from_ymd_opt(2016, 1, 4).unwrap();

    // Eight years of weekly closes with mild drift.
    let mut dates = Vec::new();
    let mut closes = Vec::new();
    for week in 0..418 {
        dates.push(start + Duration::weeks(week));
        closes.push(60.0 * (1.0009_f64).powi(week as i32));
    }
    let prices = PriceSeries::new(dates, closes).expect("valid fixture");

    // Quarterly dividends growing a little every year.
    let mut div_dates = Vec::new();
    let mut amounts = Vec::new();
    for quarter in 0..32 {
        div_dates.push(start + Duration::days(45 + quarter * 91));
        amounts.push(0.40 + 0.01 * (quarter / 4) as f64);
    }
    let dividends = DividendSeries::new(div_dates, amounts).expect("valid fixture");

    let scorer = DividendScorer::new(BenchmarkAnchors::default());
    let report = scorer.score(&prices, &dividends).expect("scoring");
    println!("scores: {:?}", report.scores.to_map());
    println!("{}", report.yearly.frame());

    let five_year = scorer
        .trailing_five_years(true)
        .score(&prices, &dividends)
        .expect("scoring");
    println!("trailing 5y scores: {:?}", five_year.scores.to_map());

    let simulation = simulate_reinvestment(&prices, &dividends, "DEMO");
    println!(
        "{} reinvestment events, {:.4} shares at the end",
        simulation.len(),
        simulation.final_shares()
    );
    println!("{}", simulation.to_frame().expect("frame"));
}
