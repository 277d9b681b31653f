//! CSV-backed historical price provider
//!
//! Prices live in `<data_dir>/<TICKER>.csv` with a header row followed by
//! `date,close` records. Dates are either `YYYY-MM-DD HH:MM:SS±TZ`
//! (the export format of the upstream data source) or plain `YYYY-MM-DD`.
//! A malformed record is an error, not a skipped row.

use std::path::PathBuf;

use jiff::civil::Date;
use portsim_core::error::DataError;
use portsim_core::model::HistoricalSeries;
use portsim_core::provider::HistoricalPriceProvider;

#[derive(Debug, Clone)]
pub struct CsvPriceProvider {
    data_dir: PathBuf,
}

impl CsvPriceProvider {
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

fn parse_date(field: &str) -> Result<Date, jiff::Error> {
    Date::strptime("%Y-%m-%d %H:%M:%S%:z", field).or_else(|_| Date::strptime("%Y-%m-%d", field))
}

fn malformed(ticker: &str, line: usize, reason: impl ToString) -> DataError {
    DataError::MalformedRecord {
        ticker: ticker.to_string(),
        line,
        reason: reason.to_string(),
    }
}

impl HistoricalPriceProvider for CsvPriceProvider {
    fn series(&self, ticker: &str) -> Result<HistoricalSeries, DataError> {
        let path = self.data_dir.join(format!("{ticker}.csv"));
        let contents = std::fs::read_to_string(&path).map_err(|_| DataError::Unavailable {
            ticker: ticker.to_string(),
        })?;

        let mut points = Vec::new();
        // Line numbers are 1-based; line 1 is the header
        for (index, record) in contents.lines().enumerate().skip(1) {
            let line = index + 1;
            if record.trim().is_empty() {
                continue;
            }
            let mut fields = record.split(',');
            let date_field = fields
                .next()
                .ok_or_else(|| malformed(ticker, line, "missing date field"))?;
            let price_field = fields
                .next()
                .ok_or_else(|| malformed(ticker, line, "missing price field"))?;

            let date = parse_date(date_field.trim())
                .map_err(|e| malformed(ticker, line, format!("bad date: {e}")))?;
            let price: f64 = price_field
                .trim()
                .parse()
                .map_err(|e| malformed(ticker, line, format!("bad price: {e}")))?;
            points.push((date, price));
        }

        tracing::debug!(ticker, rows = points.len(), "loaded price history");
        Ok(HistoricalSeries::from_points(points))
    }
}
