//! Historical closing-price series for a single instrument

use jiff::civil::Date;

/// Ordered mapping from calendar date to closing price.
///
/// Dates are strictly increasing; the series is immutable after load.
/// At least two points are required to derive any return.
#[derive(Debug, Clone, Default)]
pub struct HistoricalSeries {
    points: Vec<(Date, f64)>,
}

impl HistoricalSeries {
    /// Build a series from date/price points.
    ///
    /// Points are sorted by date; a later duplicate date replaces the
    /// earlier one, matching ordered-map insertion semantics.
    #[must_use]
    pub fn from_points(mut points: Vec<(Date, f64)>) -> Self {
        points.sort_by_key(|(date, _)| *date);
        points.dedup_by(|curr, prev| {
            if curr.0 == prev.0 {
                prev.1 = curr.1;
                true
            } else {
                false
            }
        });
        Self { points }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent closing price, the anchor for simulated paths
    #[must_use]
    pub fn last_price(&self) -> Option<f64> {
        self.points.last().map(|(_, price)| *price)
    }

    #[must_use]
    pub fn points(&self) -> &[(Date, f64)] {
        &self.points
    }

    /// Derive log-returns: `ln(1 + pct_change)` per consecutive date pair.
    ///
    /// The result has length `len() - 1` (empty for a series with fewer
    /// than two points).
    #[must_use]
    pub fn log_returns(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|pair| {
                let (_, prev) = pair[0];
                let (_, curr) = pair[1];
                let pct_change = (curr - prev) / prev;
                (1.0 + pct_change).ln()
            })
            .collect()
    }
}
