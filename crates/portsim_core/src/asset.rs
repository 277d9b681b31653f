//! A single instrument: historical prices plus simulated future paths

use std::sync::OnceLock;

use rand::Rng;

use crate::error::{Result, SimError};
use crate::model::{HistoricalSeries, NormalModel};
use crate::provider::HistoricalPriceProvider;

/// One instrument in a portfolio.
///
/// Owns the historical price series and lazily derives the log-return
/// sample and the fitted return distribution. Both derived fields are
/// guarded by `OnceLock`: computed at most once, then safe for
/// concurrent readers across parallel trials.
#[derive(Debug)]
pub struct Asset {
    ticker: String,
    history: HistoricalSeries,
    log_returns: OnceLock<Vec<f64>>,
    model: OnceLock<NormalModel>,
}

impl Asset {
    #[must_use]
    pub fn new(ticker: impl Into<String>, history: HistoricalSeries) -> Self {
        Self {
            ticker: ticker.into(),
            history,
            log_returns: OnceLock::new(),
            model: OnceLock::new(),
        }
    }

    /// Load an asset's history through the provider seam
    pub fn load(ticker: &str, provider: &impl HistoricalPriceProvider) -> Result<Self> {
        let history = provider.series(ticker)?;
        Ok(Self::new(ticker, history))
    }

    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    #[must_use]
    pub fn history(&self) -> &HistoricalSeries {
        &self.history
    }

    /// The most recent historical close, the anchor for simulated paths
    pub fn last_price(&self) -> Result<f64> {
        self.history
            .last_price()
            .ok_or_else(|| SimError::NoHistoricalData {
                ticker: self.ticker.clone(),
            })
    }

    /// Log-returns derived from the historical series, computed on first
    /// access and cached for the asset's lifetime.
    pub fn log_returns(&self) -> Result<&[f64]> {
        if self.history.is_empty() {
            return Err(SimError::NoHistoricalData {
                ticker: self.ticker.clone(),
            });
        }
        Ok(self.log_returns.get_or_init(|| self.history.log_returns()))
    }

    /// The return distribution fitted from `log_returns()`, cached after
    /// the first fit.
    ///
    /// A single-point series yields an empty return sample and fails
    /// with `StatsError::EmptySample`.
    pub fn model(&self) -> Result<NormalModel> {
        if let Some(model) = self.model.get() {
            return Ok(*model);
        }
        let fitted = NormalModel::fit(self.log_returns()?)?;
        Ok(*self.model.get_or_init(|| fitted))
    }

    /// Simulate one future price path of length `days + 1`.
    ///
    /// Index 0 is the last known price; each subsequent value compounds
    /// the previous one by `exp(draw)` for one sampled log-return.
    /// `days = 0` returns just the anchor.
    ///
    /// The anchor must be positive and finite; a zero close would make
    /// every relative move divide by zero downstream.
    pub fn simulate_path<R: Rng + ?Sized>(&self, days: usize, rng: &mut R) -> Result<Vec<f64>> {
        let anchor = self.last_price()?;
        if !(anchor.is_finite() && anchor > 0.0) {
            return Err(SimError::NonPositivePrice {
                ticker: self.ticker.clone(),
                price: anchor,
            });
        }
        let model = self.model()?;
        let returns = model.sample_walk(days, rng)?;

        let mut path = Vec::with_capacity(days + 1);
        let mut price = anchor;
        path.push(price);
        for log_return in returns {
            price *= log_return.exp();
            path.push(price);
        }
        Ok(path)
    }
}
