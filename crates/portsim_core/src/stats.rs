//! Summary statistics over final portfolio values
//!
//! Uses the same population formulas as `NormalModel::fit`, but is
//! deliberately permissive: an empty sample summarizes to `{0.0, 0.0}`
//! rather than an error, so an empty batch still renders a report.

use serde::{Deserialize, Serialize};

/// Arithmetic mean; `0.0` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by N, not N-1); `0.0` for an
/// empty slice
#[must_use]
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Mean and population standard deviation of a final-value sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            mean: mean(values),
            std_dev: population_std_dev(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert_eq!(population_std_dev(&values), 2.0);
    }

    #[test]
    fn test_empty_sample_defaults_to_zero() {
        let summary = Summary::from_values(&[]);
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_single_value() {
        let summary = Summary::from_values(&[42.0]);
        assert_eq!(summary.mean, 42.0);
        assert_eq!(summary.std_dev, 0.0);
    }
}
