//! Candle Clash CLI: dataset and config tooling.
//!
//! Commands:
//! - `generate`: write a synthetic 5-minute session as dataset JSON
//! - `inspect`: summarize a dataset in either timeframe
//! - `config`: print the effective game config as TOML

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use candleclash_core::data::{candles_for, generate, SyntheticSpec};
use candleclash_core::domain::price_range;
use candleclash_core::{Candle, Dataset, GameConfig, Timeframe};

#[derive(Parser)]
#[command(name = "candleclash-cli", about = "Candle Clash CLI: dataset and config tooling")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic session and save it as dataset JSON.
    Generate {
        /// Output file.
        #[arg(long)]
        out: PathBuf,

        /// Ticker symbol stored in the dataset.
        #[arg(long, default_value = "STX")]
        ticker: String,

        /// Session date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Number of 5-minute candles.
        #[arg(long, default_value_t = 50)]
        count: usize,

        /// RNG seed for a reproducible session.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a summary of a dataset file.
    Inspect {
        /// Dataset JSON file.
        path: PathBuf,

        /// View to summarize: 5min or 15min.
        #[arg(long, default_value = "5min")]
        timeframe: Timeframe,
    },
    /// Print the effective game config as TOML.
    Config {
        /// Config file. Defaults to <config dir>/candleclash/config.toml.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Generate {
            out,
            ticker,
            date,
            count,
            seed,
        } => run_generate(&out, ticker, date.as_deref(), count, seed),
        Commands::Inspect { path, timeframe } => run_inspect(&path, timeframe),
        Commands::Config { path } => run_config(path),
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run_generate(
    out: &Path,
    ticker: String,
    date: Option<&str>,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    if count == 0 {
        bail!("--count must be at least 1");
    }
    let date = date
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()
        .context("--date must be YYYY-MM-DD")?
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!(?seed, "rng ready");

    let spec = SyntheticSpec::new(ticker, date, count);
    let dataset = generate(&spec, &mut rng);
    dataset
        .save(out)
        .with_context(|| format!("write dataset {}", out.display()))?;

    info!(path = %out.display(), candles = dataset.candles.len(), "dataset written");
    println!(
        "Wrote {} candles for {} on {} to {}",
        dataset.candles.len(),
        dataset.ticker,
        dataset.date,
        out.display()
    );
    Ok(())
}

fn run_inspect(path: &Path, timeframe: Timeframe) -> Result<()> {
    let dataset =
        Dataset::load(path).with_context(|| format!("load dataset {}", path.display()))?;
    let candles = candles_for(&dataset.candles, timeframe);
    print!("{}", summary(&dataset, &candles, timeframe));
    Ok(())
}

/// Human-readable dataset report for one view.
fn summary(dataset: &Dataset, candles: &[Candle], timeframe: Timeframe) -> String {
    let mut out = String::new();
    out.push_str(&format!("Ticker:     {}\n", dataset.ticker));
    out.push_str(&format!("Date:       {}\n", dataset.date));
    out.push_str(&format!("Timeframe:  {timeframe}\n"));
    out.push_str(&format!("Candles:    {}\n", candles.len()));

    if let (Some(first), Some(last), Some((low, high))) =
        (candles.first(), candles.last(), price_range(candles))
    {
        let volume: u64 = candles.iter().map(|c| c.volume).sum();
        let change = last.close - first.open;
        let change_pct = if first.open != 0.0 {
            change / first.open * 100.0
        } else {
            0.0
        };
        out.push_str(&format!("Range:      {low:.2} - {high:.2}\n"));
        out.push_str(&format!("Volume:     {volume}\n"));
        out.push_str(&format!("Change:     {change:+.2} ({change_pct:+.2}%)\n"));
        out.push_str(&format!("First:      {}\n", candle_line(first)));
        out.push_str(&format!("Last:       {}\n", candle_line(last)));
    }
    out
}

fn candle_line(c: &Candle) -> String {
    let clock = DateTime::from_timestamp(c.time, 0)
        .map(|t| t.format("%H:%M UTC").to_string())
        .unwrap_or_else(|| c.time.to_string());
    format!(
        "{clock}  O {:.2}  H {:.2}  L {:.2}  C {:.2}  V {}",
        c.open, c.high, c.low, c.close, c.volume
    )
}

fn run_config(path: Option<PathBuf>) -> Result<()> {
    let config = match path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => {
            let path = default_config_path();
            debug!(path = %path.display(), "default config location");
            GameConfig::load_or_default(&path)
                .with_context(|| format!("load config {}", path.display()))?
        }
    };
    print!("{}", config.to_toml()?);
    Ok(())
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("candleclash")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        let candles = (0..6)
            .map(|i| Candle {
                time: 1_792_161_000 + i * 300,
                open: 100.0 + i as f64,
                high: 102.0 + i as f64,
                low: 99.0 + i as f64,
                close: 101.0 + i as f64,
                volume: 1_000,
            })
            .collect();
        Dataset {
            ticker: "STX".into(),
            date: "2026-10-16".into(),
            timeframe: "5m".into(),
            candles,
        }
    }

    #[test]
    fn cli_parses_generate() {
        let cli = Cli::try_parse_from([
            "candleclash-cli",
            "generate",
            "--out",
            "x.json",
            "--seed",
            "42",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                ticker, count, seed, ..
            } => {
                assert_eq!(ticker, "STX");
                assert_eq!(count, 50);
                assert_eq!(seed, Some(42));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn cli_parses_inspect_timeframe() {
        let cli =
            Cli::try_parse_from(["candleclash-cli", "inspect", "d.json", "--timeframe", "15m"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Inspect {
                timeframe: Timeframe::FifteenMin,
                ..
            }
        ));
    }

    #[test]
    fn summary_reports_view() {
        let data = dataset();
        let fifteen = candles_for(&data.candles, Timeframe::FifteenMin);
        let text = summary(&data, &fifteen, Timeframe::FifteenMin);
        assert!(text.contains("Timeframe:  15min"));
        assert!(text.contains("Candles:    2"));
        assert!(text.contains("Range:      99.00 - 107.00"));
        assert!(text.contains("Volume:     6000"));
        assert!(text.contains("First:      14:30 UTC"));
    }

    #[test]
    fn generate_rejects_zero_count() {
        let dir = std::env::temp_dir().join("candleclash-cli-zero");
        let err = run_generate(&dir.join("x.json"), "STX".into(), None, 0, Some(1)).unwrap_err();
        assert!(err.to_string().contains("--count"));
    }

    #[test]
    fn generate_rejects_bad_date() {
        let dir = std::env::temp_dir().join("candleclash-cli-date");
        let err = run_generate(&dir.join("x.json"), "STX".into(), Some("16/10/2026"), 5, Some(1))
            .unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
