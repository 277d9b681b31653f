use std::fmt;

/// Errors raised while loading an asset's historical price series
#[derive(Debug, Clone)]
pub enum DataError {
    /// The ticker has no backing price data
    Unavailable { ticker: String },
    /// A record in the price data could not be parsed
    MalformedRecord {
        ticker: String,
        line: usize,
        reason: String,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Unavailable { ticker } => {
                write!(f, "no historical price data available for {ticker}")
            }
            DataError::MalformedRecord {
                ticker,
                line,
                reason,
            } => {
                write!(f, "malformed price record for {ticker} at line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for DataError {}

/// Errors raised while fitting or sampling a return distribution
#[derive(Debug, Clone)]
pub enum StatsError {
    /// Statistics were requested over a zero-length sample
    EmptySample,
    /// The fitted parameters cannot back a normal sampler
    InvalidDistribution { mean: f64, std_dev: f64 },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::EmptySample => write!(f, "cannot fit a distribution to an empty sample"),
            StatsError::InvalidDistribution { mean, std_dev } => {
                write!(
                    f,
                    "invalid normal parameters (mean={mean}, std_dev={std_dev}): std_dev must be non-negative and finite"
                )
            }
        }
    }
}

impl std::error::Error for StatsError {}

/// Errors surfaced by trials and batches.
///
/// Data-loading and precondition failures are not retried; they abort the
/// enclosing batch and carry the ticker for diagnosis.
#[derive(Debug, Clone)]
pub enum SimError {
    /// An asset has zero historical points at path-generation time
    NoHistoricalData { ticker: String },
    /// The most recent historical close cannot anchor a path
    NonPositivePrice { ticker: String, price: f64 },
    Stats(StatsError),
    Data(DataError),
    /// The simulation request failed validation before any trial ran
    InvalidRequest(&'static str),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NoHistoricalData { ticker } => {
                write!(f, "no historical data for {ticker}: cannot simulate a price path")
            }
            SimError::NonPositivePrice { ticker, price } => {
                write!(
                    f,
                    "last closing price for {ticker} is {price}: the anchor price must be positive and finite"
                )
            }
            SimError::Stats(e) => write!(f, "{e}"),
            SimError::Data(e) => write!(f, "{e}"),
            SimError::InvalidRequest(msg) => write!(f, "invalid simulation request: {msg}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Stats(e) => Some(e),
            SimError::Data(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StatsError> for SimError {
    fn from(e: StatsError) -> Self {
        SimError::Stats(e)
    }
}

impl From<DataError> for SimError {
    fn from(e: DataError) -> Self {
        SimError::Data(e)
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
