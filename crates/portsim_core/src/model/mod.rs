mod distribution;
mod history;

pub use distribution::NormalModel;
pub use history::HistoricalSeries;
