//! Integration tests for the portfolio simulation engine
//!
//! Tests are organized by topic:
//! - `portfolio` - Asset paths and single-trial aggregation
//! - `batches` - Sequential/parallel batch execution and trial counts
//! - `comparison` - The top-level simulate entry point and error paths

mod portfolio;

use jiff::civil::Date;
use rustc_hash::FxHashMap;

use crate::error::DataError;
use crate::model::HistoricalSeries;
use crate::provider::HistoricalPriceProvider;

/// In-memory provider backing tests instead of flat files
pub struct MemoryProvider {
    series: FxHashMap<String, HistoricalSeries>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self {
            series: FxHashMap::default(),
        }
    }

    pub fn with_prices(mut self, ticker: &str, prices: &[f64]) -> Self {
        self.series
            .insert(ticker.to_string(), series_from_prices(prices));
        self
    }
}

impl HistoricalPriceProvider for MemoryProvider {
    fn series(&self, ticker: &str) -> Result<HistoricalSeries, DataError> {
        self.series
            .get(ticker)
            .cloned()
            .ok_or_else(|| DataError::Unavailable {
                ticker: ticker.to_string(),
            })
    }
}

/// Build a series with one closing price per consecutive day
pub fn series_from_prices(prices: &[f64]) -> HistoricalSeries {
    let start: Date = jiff::civil::date(2024, 1, 1);
    let points = prices
        .iter()
        .enumerate()
        .map(|(i, price)| {
            (
                start.saturating_add(jiff::Span::new().days(i as i64)),
                *price,
            )
        })
        .collect();
    HistoricalSeries::from_points(points)
}

pub fn weights(entries: &[(&str, f64)]) -> FxHashMap<String, f64> {
    entries
        .iter()
        .map(|(ticker, weight)| (ticker.to_string(), *weight))
        .collect()
}
