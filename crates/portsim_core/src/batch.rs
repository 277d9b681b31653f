//! Batch execution: many independent trials, sequential or parallel

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::Result;
use crate::portfolio::Portfolio;
use crate::stats::Summary;

/// The full set of trials produced by one execution strategy.
///
/// A completed batch always holds exactly the requested number of
/// trials; a failed trial fails the whole batch instead of producing a
/// partial result.
#[derive(Debug)]
pub struct Batch {
    /// One portfolio value path of length `days + 1` per trial
    pub trials: Vec<Vec<f64>>,
    /// Last element of each trial, in `trials` order
    pub final_values: Vec<f64>,
    /// Mean and population standard deviation of `final_values`
    pub stats: Summary,
    /// Wall time from dispatch through the last merged result
    pub elapsed: Duration,
    /// Worker count used to produce the batch (1 for sequential)
    pub workers: usize,
}

impl Batch {
    fn from_trials(trials: Vec<Vec<f64>>, elapsed: Duration, workers: usize) -> Self {
        let final_values: Vec<f64> = trials
            .iter()
            .filter_map(|trial| trial.last().copied())
            .collect();
        let stats = Summary::from_values(&final_values);
        Self {
            trials,
            final_values,
            stats,
            elapsed,
            workers,
        }
    }
}

/// Run `num_trials` trials on the calling thread, preserving submission
/// order in the trial collection.
pub fn run_batch_sequential(
    portfolio: &Portfolio,
    days: usize,
    num_trials: usize,
    seed: u64,
) -> Result<Batch> {
    let start = Instant::now();
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut trials = Vec::with_capacity(num_trials);
    for _ in 0..num_trials {
        trials.push(portfolio.run_trial(days, &mut rng)?);
    }

    Ok(Batch::from_trials(trials, start.elapsed(), 1))
}

/// Run `num_trials` trials fanned out across a bounded worker pool.
///
/// Worker count is `min(available parallelism, num_trials)`. Trials are
/// partitioned evenly with the remainder spread one-per-worker across
/// the leading workers, so the batch always totals exactly `num_trials`.
/// Each worker owns an independently-seeded generator and an owned local
/// trial vector; the orchestrator merges only after every worker has
/// completed. Any worker failure fails the whole batch. No cross-worker
/// ordering is guaranteed for the merged trials.
pub fn run_batch_parallel(
    portfolio: &Portfolio,
    days: usize,
    num_trials: usize,
    seed: u64,
) -> Result<Batch> {
    let hardware = std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1);
    let workers = hardware.min(num_trials);
    if workers == 0 {
        return Ok(Batch::from_trials(Vec::new(), Duration::ZERO, 0));
    }

    let base = num_trials / workers;
    let remainder = num_trials % workers;

    // Per-worker seeds drawn upfront so worker generators never share state
    let mut master = SmallRng::seed_from_u64(seed);
    let worker_seeds: Vec<u64> = (0..workers).map(|_| master.next_u64()).collect();

    let start = Instant::now();
    let per_worker: Vec<Vec<Vec<f64>>> = (0..workers)
        .into_par_iter()
        .map(|worker| {
            let mut rng = SmallRng::seed_from_u64(worker_seeds[worker]);
            let count = base + usize::from(worker < remainder);
            (0..count)
                .map(|_| portfolio.run_trial(days, &mut rng))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    let trials: Vec<Vec<f64>> = per_worker.into_iter().flatten().collect();
    Ok(Batch::from_trials(trials, start.elapsed(), workers))
}
