//! Normal return distribution fitted from historical log-returns

use rand::{Rng, distr::Distribution};
use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::stats;

/// A normal distribution fitted once from a sample of log-returns.
///
/// Immutable value object; safe to share read-only across concurrent
/// trials after the first fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalModel {
    pub mean: f64,
    pub std_dev: f64,
}

impl NormalModel {
    /// Fit mean and population standard deviation (divide by N) from a
    /// non-empty sample.
    pub fn fit(sample: &[f64]) -> Result<Self, StatsError> {
        if sample.is_empty() {
            return Err(StatsError::EmptySample);
        }
        let mean = stats::mean(sample);
        let std_dev = stats::population_std_dev(sample);
        Ok(Self { mean, std_dev })
    }

    fn sampler(&self) -> Result<rand_distr::Normal<f64>, StatsError> {
        rand_distr::Normal::new(self.mean, self.std_dev).map_err(|_| {
            StatsError::InvalidDistribution {
                mean: self.mean,
                std_dev: self.std_dev,
            }
        })
    }

    /// Draw `steps` independent returns from the fitted distribution.
    ///
    /// The generator is caller-supplied so each concurrent unit of work
    /// owns its own state; no global generator is shared.
    pub fn sample_walk<R: Rng + ?Sized>(
        &self,
        steps: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, StatsError> {
        let dist = self.sampler()?;
        Ok((0..steps).map(|_| dist.sample(rng)).collect())
    }
}
