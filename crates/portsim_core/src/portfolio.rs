//! Weighted collection of assets aggregated into portfolio value paths

use rand::Rng;
use rustc_hash::FxHashMap;

use crate::asset::Asset;
use crate::error::Result;
use crate::provider::HistoricalPriceProvider;

#[derive(Debug)]
struct Holding {
    weight: f64,
    asset: Asset,
}

/// Initial capital plus one weighted [`Asset`] per ticker.
///
/// Weights are fractions in `[0, 1]`, pre-normalized by the caller; the
/// engine does not validate that they sum to 1.
#[derive(Debug)]
pub struct Portfolio {
    initial_capital: f64,
    holdings: Vec<Holding>,
}

impl Portfolio {
    /// Build a portfolio by loading every weighted ticker through the
    /// provider.
    pub fn new(
        initial_capital: f64,
        weights: &FxHashMap<String, f64>,
        provider: &impl HistoricalPriceProvider,
    ) -> Result<Self> {
        // Sort tickers so asset iteration order (and therefore seeded
        // random draws) is deterministic. HashMap iteration order is not.
        let mut tickers: Vec<_> = weights.keys().collect();
        tickers.sort();

        let mut holdings = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            holdings.push(Holding {
                weight: weights[ticker],
                asset: Asset::load(ticker, provider)?,
            });
        }
        Ok(Self {
            initial_capital,
            holdings,
        })
    }

    /// Build a portfolio from already-loaded assets, ordered as given
    #[must_use]
    pub fn from_holdings(initial_capital: f64, holdings: Vec<(f64, Asset)>) -> Self {
        Self {
            initial_capital,
            holdings: holdings
                .into_iter()
                .map(|(weight, asset)| Holding { weight, asset })
                .collect(),
        }
    }

    #[must_use]
    pub fn initial_capital(&self) -> f64 {
        self.initial_capital
    }

    #[must_use]
    pub fn num_holdings(&self) -> usize {
        self.holdings.len()
    }

    /// Run one trial: simulate one path per asset and aggregate them day
    /// by day into a portfolio value path of length `days + 1`.
    ///
    /// Day `d`'s value is the sum over assets of
    /// `weight * initial_capital * path[d] / path[0]`.
    ///
    /// No side effects beyond fresh path allocation; safe to invoke from
    /// concurrent trials as long as each caller owns its generator (the
    /// cached per-asset model is read-only after first fit).
    pub fn run_trial<R: Rng + ?Sized>(&self, days: usize, rng: &mut R) -> Result<Vec<f64>> {
        let mut asset_paths = Vec::with_capacity(self.holdings.len());
        for holding in &self.holdings {
            asset_paths.push(holding.asset.simulate_path(days, rng)?);
        }

        let mut trial = Vec::with_capacity(days + 1);
        for day in 0..=days {
            let mut value = 0.0;
            for (holding, path) in self.holdings.iter().zip(&asset_paths) {
                let allocation = holding.weight * self.initial_capital;
                value += allocation * path[day] / path[0];
            }
            trial.push(value);
        }
        Ok(trial)
    }
}
