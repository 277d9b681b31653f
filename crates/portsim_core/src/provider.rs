//! Historical price loading seam
//!
//! The engine never touches files or the network itself; callers hand it
//! an implementation of [`HistoricalPriceProvider`]. The `portsim` binary
//! ships a CSV-backed implementation.

use crate::error::DataError;
use crate::model::HistoricalSeries;

/// Source of historical closing prices, keyed by ticker symbol.
///
/// Implementations fail with [`DataError::Unavailable`] when a ticker has
/// no backing data and [`DataError::MalformedRecord`] when a record
/// cannot be parsed. Closing prices are expected to be positive; a
/// non-positive final close is rejected at path-generation time.
pub trait HistoricalPriceProvider {
    fn series(&self, ticker: &str) -> Result<HistoricalSeries, DataError>;
}
