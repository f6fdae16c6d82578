//! Calendar-year aggregation of dividends against prices.

use crate::dividend::DividendSeries;
use crate::error::Result;
use crate::price::PriceSeries;
use chrono::Datelike;
use polars::prelude::*;

/// Yearly dividend totals merged with the year's mean close and the implied
/// yield.
///
/// Backing frame columns: `year` (i32), `dividend` (total cash paid that
/// year), `price` (mean adjusted close over the year), `yield`
/// (dividend / price). Only years present in both inputs appear. An empty
/// dividend history produces an empty table with the schema intact.
#[derive(Debug, Clone)]
pub struct YearlyAggregate {
    df: DataFrame,
}

impl YearlyAggregate {
    /// Merge a dividend history into yearly totals against the price history.
    pub fn from_series(prices: &PriceSeries, dividends: &DividendSeries) -> Result<Self> {
        if dividends.is_empty() {
            return Ok(Self {
                df: Self::empty_frame()?,
            });
        }

        let div_years: Vec<i32> = dividends.dates().iter().map(|d| d.year()).collect();
        let price_years: Vec<i32> = prices.dates().iter().map(|d| d.year()).collect();

        let div_df = DataFrame::new(vec![
            Series::new("year".into(), div_years).into(),
            Series::new("dividend".into(), dividends.amounts().to_vec()).into(),
        ])?;
        let price_df = DataFrame::new(vec![
            Series::new("year".into(), price_years).into(),
            Series::new("price".into(), prices.closes().to_vec()).into(),
        ])?;

        let df = div_df
            .lazy()
            .group_by([col("year")])
            .agg([col("dividend").sum()])
            .join(
                price_df
                    .lazy()
                    .group_by([col("year")])
                    .agg([col("price").mean()]),
                [col("year")],
                [col("year")],
                JoinArgs::new(JoinType::Inner),
            )
            .with_columns([(col("dividend") / col("price")).alias("yield")])
            .sort(["year"], Default::default())
            .collect()?;

        Ok(Self { df })
    }

    fn empty_frame() -> Result<DataFrame> {
        let df = DataFrame::new(vec![
            Series::new("year".into(), Vec::<i32>::new()).into(),
            Series::new("dividend".into(), Vec::<f64>::new()).into(),
            Series::new("price".into(), Vec::<f64>::new()).into(),
            Series::new("yield".into(), Vec::<f64>::new()).into(),
        ])?;
        Ok(df)
    }

    /// The backing frame, for downstream display.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Number of merged years.
    pub fn len(&self) -> usize {
        self.df.height()
    }

    /// Whether no year carries both a dividend total and a price.
    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Calendar years, ascending.
    pub fn years(&self) -> Result<Vec<i32>> {
        Ok(self.df.column("year")?.i32()?.into_no_null_iter().collect())
    }

    /// Total dividend paid per year.
    pub fn dividends(&self) -> Result<Vec<f64>> {
        self.f64_column("dividend")
    }

    /// Mean adjusted close per year.
    pub fn prices(&self) -> Result<Vec<f64>> {
        self.f64_column("price")
    }

    /// Yearly yield, `dividend / price`.
    pub fn yields(&self) -> Result<Vec<f64>> {
        self.f64_column("yield")
    }

    /// Mean yearly yield over the merged years, `None` when empty.
    pub fn mean_yield(&self) -> Result<Option<f64>> {
        Ok(self.df.column("yield")?.f64()?.mean())
    }

    /// Year-over-year growth of the dividend total, one entry per consecutive
    /// pair of years. A zero base year yields NaN for that entry.
    pub fn dividend_growth(&self) -> Result<Vec<f64>> {
        let dividends = self.dividends()?;
        Ok(dividends
            .windows(2)
            .map(|w| if w[0] > 0.0 { w[1] / w[0] - 1.0 } else { f64::NAN })
            .collect())
    }

    fn f64_column(&self, name: &str) -> Result<Vec<f64>> {
        Ok(self.df.column(name)?.f64()?.into_no_null_iter().collect())
    }
}
