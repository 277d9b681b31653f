use std::path::PathBuf;

use clap::Parser;
use portsim_core::{SimulationRequest, simulate};
use rustc_hash::FxHashMap;
use tracing_subscriber::EnvFilter;

mod provider;

use provider::CsvPriceProvider;

#[derive(Parser, Debug)]
#[command(name = "portsim")]
#[command(about = "Monte Carlo portfolio simulator comparing sequential and parallel execution")]
struct Args {
    /// Directory holding one <TICKER>.csv price history per asset
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Portfolio weight in percent, e.g. --weight AAPL=60 --weight MSFT=40
    #[arg(short, long = "weight", value_parser = parse_weight, required = true)]
    weights: Vec<(String, f64)>,

    /// Initial capital to allocate across the weights
    #[arg(short, long, default_value_t = 10_000.0)]
    capital: f64,

    /// Number of future days to simulate per trial
    #[arg(long, default_value_t = 30)]
    days: usize,

    /// Number of independent trials per batch
    #[arg(short, long, default_value_t = 10_000)]
    trials: usize,

    /// Seed for reproducible runs (default: fresh entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the full comparison result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Parse a `TICKER=PERCENT` weight argument; percentages are converted
/// to fractions before they reach the engine.
fn parse_weight(arg: &str) -> Result<(String, f64), String> {
    let (ticker, percent) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected TICKER=PERCENT, got '{arg}'"))?;
    let percent: f64 = percent
        .parse()
        .map_err(|e| format!("bad weight for {ticker}: {e}"))?;
    if !(percent.is_finite() && percent >= 0.0) {
        return Err(format!("weight for {ticker} must be non-negative"));
    }
    Ok((ticker.to_string(), percent / 100.0))
}

fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("portsim={level},portsim_core={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    let weights: FxHashMap<String, f64> = args.weights.iter().cloned().collect();
    let request = SimulationRequest {
        initial_capital: args.capital,
        weights,
        days_to_predict: args.days,
        num_trials: args.trials,
        seed: args.seed,
    };

    let provider = CsvPriceProvider::new(args.data_dir);

    tracing::info!(
        trials = request.num_trials,
        days = request.days_to_predict,
        assets = request.weights.len(),
        "starting simulation"
    );
    let result = simulate(&request, &provider)?;
    tracing::info!(
        sequential_ms = result.sequential.elapsed_ms,
        parallel_ms = result.parallel.elapsed_ms,
        workers = result.parallel.workers,
        "simulation complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Sequential Execution:");
    println!("  Mean Final Value:   {:.2}", result.sequential.mean);
    println!("  Standard Deviation: {:.2}", result.sequential.std_dev);
    println!("  Execution Time:     {} ms", result.sequential.elapsed_ms);
    println!();
    println!("Parallel Execution ({} workers):", result.parallel.workers);
    println!("  Mean Final Value:   {:.2}", result.parallel.mean);
    println!("  Standard Deviation: {:.2}", result.parallel.std_dev);
    println!("  Execution Time:     {} ms", result.parallel.elapsed_ms);
    println!();
    println!(
        "Parallel execution is {:.2}% faster than sequential execution.",
        result.speedup_percent()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight_converts_percent() {
        let (ticker, weight) = parse_weight("AAPL=60").unwrap();
        assert_eq!(ticker, "AAPL");
        assert!((weight - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_parse_weight_rejects_garbage() {
        assert!(parse_weight("AAPL").is_err());
        assert!(parse_weight("AAPL=sixty").is_err());
        assert!(parse_weight("AAPL=-5").is_err());
    }
}
