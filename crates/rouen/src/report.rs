//! Per-ticker aggregation of every computation step.

use rouen_dividend::{BenchmarkAnchors, DividendScorer, ScoreReport, SimulationResult};
use rouen_dividend::simulate_reinvestment;
use rouen_metrics::{
    AnnualizedReturn, MaxDrawdown, RiskRatios, annualized_return, annualized_return_five_years,
    max_drawdown, sharpe_and_sortino, sharpe_and_sortino_five_years, volatility,
    volatility_five_years,
};
use rouen_series::{DividendSeries, PriceSeries, Result, SeriesProvider};
use std::fmt;

/// Every metric, score and simulation for one ticker, computed in one pass.
///
/// Each step is an explicit outcome: `None` records that the step could not
/// be computed (series too short, no dividend history) without aborting the
/// rest. Callers skip downstream rendering for absent steps; nothing here
/// panics on thin data.
#[derive(Debug, Clone)]
pub struct TickerReport {
    /// Ticker the report was computed for.
    pub ticker: String,
    /// Annualized return over the full history.
    pub annualized: Option<AnnualizedReturn>,
    /// Annualized return over the trailing five years.
    pub annualized_five_years: Option<AnnualizedReturn>,
    /// Daily volatility over the full history.
    pub volatility: Option<f64>,
    /// Daily volatility over the trailing five years.
    pub volatility_five_years: Option<f64>,
    /// Sharpe/Sortino over the full history.
    pub ratios: Option<RiskRatios>,
    /// Sharpe/Sortino over the trailing five years.
    pub ratios_five_years: Option<RiskRatios>,
    /// Deepest peak-to-trough decline. Always defined for a valid series.
    pub max_drawdown: MaxDrawdown,
    /// Dividend scores over the full history.
    pub scores: Option<ScoreReport>,
    /// Dividend scores over the trailing five years.
    pub scores_five_years: Option<ScoreReport>,
    /// Dividend reinvestment replay; empty when the ticker pays nothing.
    pub simulation: SimulationResult,
}

impl TickerReport {
    /// Compute every step for `ticker` from already-validated series.
    pub fn compute(
        ticker: &str,
        prices: &PriceSeries,
        dividends: &DividendSeries,
        anchors: BenchmarkAnchors,
    ) -> Self {
        let scorer = DividendScorer::new(anchors);
        let scorer_five = DividendScorer::new(anchors).trailing_five_years(true);

        Self {
            ticker: ticker.to_string(),
            annualized: annualized_return(prices).ok(),
            annualized_five_years: annualized_return_five_years(prices).ok(),
            volatility: volatility(prices).ok(),
            volatility_five_years: volatility_five_years(prices).ok(),
            ratios: sharpe_and_sortino(prices).ok(),
            ratios_five_years: sharpe_and_sortino_five_years(prices).ok(),
            max_drawdown: max_drawdown(prices),
            scores: scorer.score(prices, dividends).ok(),
            scores_five_years: scorer_five.score(prices, dividends).ok(),
            simulation: simulate_reinvestment(prices, dividends, ticker),
        }
    }

    /// Fetch both histories from `provider` and compute the report.
    ///
    /// Provider failures propagate; a ticker without dividends is not a
    /// failure, the provider returns an empty series for it.
    pub fn from_provider<P: SeriesProvider>(
        provider: &P,
        ticker: &str,
        anchors: BenchmarkAnchors,
    ) -> Result<Self> {
        let prices = provider.price_history(ticker)?;
        let dividends = provider.dividend_history(ticker)?;
        Ok(Self::compute(ticker, &prices, &dividends, anchors))
    }

    /// Whether the ticker has any scored dividend history.
    pub fn has_dividend_history(&self) -> bool {
        self.scores
            .as_ref()
            .is_some_and(|report| !report.yearly.is_empty())
    }
}

fn write_opt(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: Option<&dyn fmt::Display>,
) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "{label:<28}{v}"),
        None => writeln!(f, "{label:<28}n/a"),
    }
}

impl fmt::Display for TickerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.ticker)?;
        write_opt(
            f,
            "annualized return",
            self.annualized.as_ref().map(|v| v as &dyn fmt::Display),
        )?;
        write_opt(
            f,
            "annualized return (5y)",
            self.annualized_five_years
                .as_ref()
                .map(|v| v as &dyn fmt::Display),
        )?;
        match self.volatility {
            Some(v) => writeln!(f, "{:<28}{v:.6}", "daily volatility")?,
            None => writeln!(f, "{:<28}n/a", "daily volatility")?,
        }
        match self.volatility_five_years {
            Some(v) => writeln!(f, "{:<28}{v:.6}", "daily volatility (5y)")?,
            None => writeln!(f, "{:<28}n/a", "daily volatility (5y)")?,
        }
        write_opt(
            f,
            "risk ratios",
            self.ratios.as_ref().map(|v| v as &dyn fmt::Display),
        )?;
        write_opt(
            f,
            "risk ratios (5y)",
            self.ratios_five_years
                .as_ref()
                .map(|v| v as &dyn fmt::Display),
        )?;
        writeln!(f, "{:<28}{}", "maximum drawdown", self.max_drawdown)?;

        if let Some(report) = &self.scores {
            writeln!(f, "{:<28}{:.4}", "dividend composite", report.scores.composite)?;
        }
        if self.simulation.is_empty() {
            writeln!(f, "{:<28}none", "reinvestment events")?;
        } else {
            writeln!(
                f,
                "{:<28}{} events, {:.4} final shares",
                "reinvestment events",
                self.simulation.len(),
                self.simulation.final_shares()
            )?;
        }
        Ok(())
    }
}
