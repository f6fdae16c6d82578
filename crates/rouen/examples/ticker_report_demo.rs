//! Build a full ticker report from synthetic data and print it.
//!
//! Run with: cargo run --example ticker_report_demo -p rouen

use chrono::{Duration, NaiveDate};
use rouen::{BenchmarkAnchors, DividendSeries, PriceSeries, TickerReport};

fn main() {
    let start = NaiveDate::from_ymd_opt(2017, 1, 2).unwrap();

    let dates: Vec<NaiveDate> = (0..364).map(|i| start + Duration::weeks(i)).collect();
    let closes: Vec<f64> = (0..364)
        .map(|i| {
            let drift = 90.0 * (1.0012_f64).powi(i);
            // A drawdown in the third year.
            if (104..130).contains(&i) { drift * 0.8 } else { drift }
        })
        .collect();
    let prices = PriceSeries::new(dates, closes).expect("valid fixture");

    let div_dates: Vec<NaiveDate> = (0..28).map(|q| start + Duration::days(50 + q * 91)).collect();
    let amounts: Vec<f64> = (0..28).map(|q| 0.55 + 0.02 * (q / 4) as f64).collect();
    let dividends = DividendSeries::new(div_dates, amounts).expect("valid fixture");

    let report = TickerReport::compute("DEMO", &prices, &dividends, BenchmarkAnchors::default());
    println!("{report}");

    if let Some(scores) = &report.scores {
        let json = serde_json::to_string_pretty(&scores.scores).expect("serializable scores");
        println!("scores as JSON:\n{json}");
    }
}
