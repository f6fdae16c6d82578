//! End-to-end scenario: a trading year of rising prices with quarterly
//! dividends, scored and simulated together.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rouen_dividend::{BenchmarkAnchors, DividendScorer, simulate_reinvestment};
use rouen_series::{DividendSeries, PriceSeries};

/// 252 consecutive weekdays starting at `start`.
fn weekdays(start: NaiveDate, n: usize) -> Vec<NaiveDate> {
    let mut out = Vec::with_capacity(n);
    let mut day = start;
    while out.len() < n {
        if day.weekday() != Weekday::Sat && day.weekday() != Weekday::Sun {
            out.push(day);
        }
        day += Duration::days(1);
    }
    out
}

fn rising_year() -> PriceSeries {
    let dates = weekdays(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(), 252);
    let closes: Vec<f64> = (0..252).map(|i| 100.0 + 100.0 * i as f64 / 251.0).collect();
    PriceSeries::new(dates, closes).unwrap()
}

#[test]
fn test_quarterly_dividends_produce_five_events() {
    let prices = rising_year();

    // Five dividends of 1.0 spread through the price history.
    let div_dates: Vec<NaiveDate> = prices
        .dates()
        .iter()
        .step_by(50)
        .take(5)
        .copied()
        .collect();
    let dividends = DividendSeries::new(div_dates.clone(), vec![1.0; 5]).unwrap();

    let result = simulate_reinvestment(&prices, &dividends, "ACME");
    assert_eq!(result.len(), 5);

    // Each event buys dividend × shares / price at the event; with a 1.0
    // payout on roughly one share that is close to 1.0 / price.
    let mut shares_before = 1.0;
    for (row, event_date) in result.rows.iter().zip(&div_dates) {
        let (_, price) = prices.close_on_or_before(*event_date).unwrap();
        let bought = row.shares - shares_before;
        assert_relative_eq!(bought, shares_before / price, epsilon = 1e-12);
        assert!(bought >= 1.0 / price);
        shares_before = row.shares;
    }

    // Reinvested cash adds up to the five payouts on the growing position.
    assert!(result.rows[4].reinvested > 5.0);
    assert!(result.rows[4].reinvested < 5.5);
}

#[test]
fn test_scores_and_simulation_agree_on_dividend_free_ticker() {
    let prices = rising_year();
    let dividends = DividendSeries::empty();

    let report = DividendScorer::new(BenchmarkAnchors::default())
        .score(&prices, &dividends)
        .unwrap();
    assert!(report.yearly.is_empty());
    assert!(report.scores.composite.is_nan());

    let simulation = simulate_reinvestment(&prices, &dividends, "ACME");
    assert!(simulation.is_empty());
    assert_abs_diff_eq!(simulation.final_shares(), 1.0, epsilon = 1e-15);
}

#[test]
fn test_single_calendar_year_yield_matches_by_hand() {
    let prices = rising_year();
    let div_dates: Vec<NaiveDate> = prices.dates().iter().step_by(60).take(4).copied().collect();
    let dividends = DividendSeries::new(div_dates, vec![1.0; 4]).unwrap();

    let report = DividendScorer::new(BenchmarkAnchors::default())
        .score(&prices, &dividends)
        .unwrap();

    // All dates fall in 2023: one merged year, yield = 4.0 / mean close.
    assert_eq!(report.yearly.years().unwrap(), vec![2023]);
    let mean_close = prices.closes().iter().sum::<f64>() / prices.len() as f64;
    let yields = report.yearly.yields().unwrap();
    assert_relative_eq!(yields[0], 4.0 / mean_close, epsilon = 1e-12);

    // A single merged year defines yield but not the growth components.
    assert!(report.scores.yield_score.is_finite());
    assert!(report.scores.consistency_score.is_nan());
}
