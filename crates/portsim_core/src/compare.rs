//! Top-level entry point: run one configuration through both execution
//! strategies and compare them

use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::batch::{Batch, run_batch_parallel, run_batch_sequential};
use crate::error::{Result, SimError};
use crate::portfolio::Portfolio;
use crate::provider::HistoricalPriceProvider;

/// One simulation configuration.
///
/// Weights are ticker -> fraction in `[0, 1]`, already normalized by the
/// caller (percentage conversion is the request layer's job).
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    pub initial_capital: f64,
    pub weights: FxHashMap<String, f64>,
    pub days_to_predict: usize,
    pub num_trials: usize,
    /// `None` draws a fresh seed from entropy; set for reproducible runs
    pub seed: Option<u64>,
}

/// Statistics and timing for one completed batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BatchSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub elapsed_ms: u64,
    pub workers: usize,
}

impl From<&Batch> for BatchSummary {
    fn from(batch: &Batch) -> Self {
        Self {
            mean: batch.stats.mean,
            std_dev: batch.stats.std_dev,
            elapsed_ms: batch.elapsed.as_millis() as u64,
            workers: batch.workers,
        }
    }
}

/// Both strategies' results for one identical configuration.
///
/// Each batch draws fresh randomness; the two are statistically
/// comparable, not numerically identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub sequential: BatchSummary,
    pub parallel: BatchSummary,
    /// Every per-trial path from the parallel batch, for downstream
    /// visualization
    pub all_trial_paths: Vec<Vec<f64>>,
}

impl ComparisonResult {
    /// How much faster the parallel batch ran, as a percentage of the
    /// sequential wall time
    #[must_use]
    pub fn speedup_percent(&self) -> f64 {
        if self.sequential.elapsed_ms == 0 {
            return 0.0;
        }
        let sequential = self.sequential.elapsed_ms as f64;
        let parallel = self.parallel.elapsed_ms as f64;
        (sequential - parallel) / sequential * 100.0
    }
}

fn validate(request: &SimulationRequest) -> Result<()> {
    if !(request.initial_capital.is_finite() && request.initial_capital > 0.0) {
        return Err(SimError::InvalidRequest(
            "initial capital must be a positive finite number",
        ));
    }
    if request.weights.is_empty() {
        return Err(SimError::InvalidRequest("at least one weighted ticker is required"));
    }
    if request.num_trials == 0 {
        return Err(SimError::InvalidRequest("at least one trial is required"));
    }
    Ok(())
}

/// Run the full comparison: build the portfolio, run one sequential and
/// one parallel batch, and report both summaries plus the parallel
/// batch's per-trial paths.
///
/// Each batch is single-shot: it runs to completion or fails as a whole.
pub fn simulate(
    request: &SimulationRequest,
    provider: &impl HistoricalPriceProvider,
) -> Result<ComparisonResult> {
    validate(request)?;

    let portfolio = Portfolio::new(request.initial_capital, &request.weights, provider)?;

    let seed = request.seed.unwrap_or_else(|| rand::rng().random());
    let sequential = run_batch_sequential(
        &portfolio,
        request.days_to_predict,
        request.num_trials,
        seed,
    )?;
    // Distinct stream for the second batch; no claim the two match
    let parallel = run_batch_parallel(
        &portfolio,
        request.days_to_predict,
        request.num_trials,
        seed.wrapping_add(0x9E37_79B9_7F4A_7C15),
    )?;

    let summary = ComparisonResult {
        sequential: BatchSummary::from(&sequential),
        parallel: BatchSummary::from(&parallel),
        all_trial_paths: parallel.trials,
    };
    Ok(summary)
}
