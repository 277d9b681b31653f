//! Tests for asset path simulation and single-trial aggregation

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::asset::Asset;
use crate::error::{SimError, StatsError};
use crate::model::HistoricalSeries;
use crate::portfolio::Portfolio;

use super::{MemoryProvider, series_from_prices, weights};

#[test]
fn test_path_length_is_days_plus_one() {
    let asset = Asset::new("ACME", series_from_prices(&[100.0, 101.0, 99.5, 102.0]));
    let mut rng = SmallRng::seed_from_u64(1);

    let path = asset.simulate_path(30, &mut rng).unwrap();
    assert_eq!(path.len(), 31);
}

#[test]
fn test_zero_day_path_is_anchor_only() {
    let asset = Asset::new("ACME", series_from_prices(&[100.0, 101.0, 99.5]));
    let mut rng = SmallRng::seed_from_u64(1);

    let path = asset.simulate_path(0, &mut rng).unwrap();
    assert_eq!(path, vec![99.5]);
}

#[test]
fn test_constant_history_gives_flat_path() {
    // Constant prices fit to {mean=0, std_dev=0}: the walk never moves
    let asset = Asset::new("FLAT", series_from_prices(&[50.0, 50.0, 50.0, 50.0]));
    let mut rng = SmallRng::seed_from_u64(9);

    let path = asset.simulate_path(20, &mut rng).unwrap();
    assert_eq!(path.len(), 21);
    assert!(path.iter().all(|price| (price - 50.0).abs() < 1e-9));
}

#[test]
fn test_log_returns_cached_length() {
    let asset = Asset::new("ACME", series_from_prices(&[100.0, 110.0, 121.0]));
    let returns = asset.log_returns().unwrap();
    assert_eq!(returns.len(), 2);
    // Second access returns the same cached slice
    assert_eq!(asset.log_returns().unwrap().as_ptr(), returns.as_ptr());
}

#[test]
fn test_empty_history_fails() {
    let asset = Asset::new("VOID", HistoricalSeries::from_points(vec![]));
    let mut rng = SmallRng::seed_from_u64(1);

    assert!(matches!(
        asset.log_returns(),
        Err(SimError::NoHistoricalData { .. })
    ));
    assert!(matches!(
        asset.simulate_path(5, &mut rng),
        Err(SimError::NoHistoricalData { .. })
    ));
}

#[test]
fn test_single_point_history_fails_fit() {
    // One price point derives zero returns: nothing to fit
    let asset = Asset::new("ONE", series_from_prices(&[100.0]));
    let mut rng = SmallRng::seed_from_u64(1);

    assert!(matches!(
        asset.simulate_path(5, &mut rng),
        Err(SimError::Stats(StatsError::EmptySample))
    ));
}

#[test]
fn test_zero_anchor_price_rejected() {
    // A zero close would anchor every relative move at a division by zero
    let asset = Asset::new("JUNK", series_from_prices(&[10.0, 5.0, 0.0]));
    let mut rng = SmallRng::seed_from_u64(1);

    assert!(matches!(
        asset.simulate_path(5, &mut rng),
        Err(SimError::NonPositivePrice { .. })
    ));
}

#[test]
fn test_trial_aggregates_weighted_relative_moves() {
    let provider = MemoryProvider::new()
        .with_prices("A", &[10.0, 10.0, 10.0])
        .with_prices("B", &[200.0, 200.0, 200.0]);
    let portfolio = Portfolio::new(10.0, &weights(&[("A", 0.6), ("B", 0.4)]), &provider).unwrap();
    let mut rng = SmallRng::seed_from_u64(3);

    // Zero-variance assets: every day's value is exactly the capital
    let trial = portfolio.run_trial(10, &mut rng).unwrap();
    assert_eq!(trial.len(), 11);
    assert!(trial.iter().all(|value| (value - 10.0).abs() < 1e-12));
}

#[test]
fn test_trial_deterministic_under_same_seed() {
    let provider = MemoryProvider::new()
        .with_prices("A", &[100.0, 103.0, 99.0, 104.0, 101.0])
        .with_prices("B", &[50.0, 49.0, 51.0, 52.0, 50.5]);
    let portfolio = Portfolio::new(1_000.0, &weights(&[("A", 0.7), ("B", 0.3)]), &provider).unwrap();

    let first = portfolio
        .run_trial(25, &mut SmallRng::seed_from_u64(42))
        .unwrap();
    let second = portfolio
        .run_trial(25, &mut SmallRng::seed_from_u64(42))
        .unwrap();
    assert_eq!(first, second);

    let other = portfolio
        .run_trial(25, &mut SmallRng::seed_from_u64(43))
        .unwrap();
    assert_ne!(first, other);
}

#[test]
fn test_unknown_ticker_aborts_construction() {
    let provider = MemoryProvider::new().with_prices("A", &[100.0, 101.0]);
    let result = Portfolio::new(10.0, &weights(&[("A", 0.5), ("MISSING", 0.5)]), &provider);
    assert!(matches!(result, Err(SimError::Data(_))));
}
