//! Monte Carlo portfolio simulation library
//!
//! This crate estimates the future-value distribution of a multi-asset
//! portfolio. For each asset it fits a normal distribution to historical
//! log-returns, draws random-walk price paths anchored at the last known
//! price, and aggregates the weighted asset paths into portfolio value
//! paths. Batches of independent trials run either sequentially or
//! fanned out across a bounded rayon worker pool, and the two strategies
//! are compared on summary statistics and wall time.
//!
//! Assets are sampled independently of each other; no cross-asset
//! correlation is modeled. The only reported risk numbers are the mean
//! and population standard deviation of final portfolio values.
//!
//! ```ignore
//! use portsim_core::{SimulationRequest, simulate};
//!
//! let request = SimulationRequest {
//!     initial_capital: 10_000.0,
//!     weights: [("AAPL".to_string(), 0.6), ("MSFT".to_string(), 0.4)]
//!         .into_iter()
//!         .collect(),
//!     days_to_predict: 30,
//!     num_trials: 10_000,
//!     seed: None,
//! };
//! let comparison = simulate(&request, &provider)?;
//! println!("parallel mean: {:.2}", comparison.parallel.mean);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod asset;
pub mod batch;
pub mod compare;
pub mod error;
pub mod portfolio;
pub mod provider;
pub mod stats;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use asset::Asset;
pub use batch::{Batch, run_batch_parallel, run_batch_sequential};
pub use compare::{BatchSummary, ComparisonResult, SimulationRequest, simulate};
pub use error::{DataError, SimError, StatsError};
pub use model::{HistoricalSeries, NormalModel};
pub use portfolio::Portfolio;
pub use provider::HistoricalPriceProvider;
pub use stats::Summary;
