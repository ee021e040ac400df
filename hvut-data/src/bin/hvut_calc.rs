use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use hvut_core::{FilingEngine, RateTables};
use hvut_data::{AppConfig, filing, logging, vehicle_csv};

/// Computes Form 2290 heavy vehicle use tax for a filing and prints the
/// tax computation table, disposal credits, balance due and the first
/// validation error as JSON.
#[derive(Parser, Debug)]
#[command(name = "hvut-calc")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with the filer record and (optionally) the vehicle list
    #[arg(short, long)]
    filing: PathBuf,

    /// CSV vehicle list; replaces the vehicles in the filing
    #[arg(short, long)]
    vehicles: Option<PathBuf>,

    /// TOML settings file; defaults are used when it does not exist
    #[arg(short, long, default_value = "hvut.toml")]
    config: PathBuf,

    /// CAPTCHA token from the submission form
    #[arg(long)]
    captcha: Option<String>,

    /// Log level or filter directive; overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Print the report on one line
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(&args.config)
        .with_context(|| format!("Failed to load config: {}", args.config.display()))?;

    let level = args.log_level.as_deref().unwrap_or(&config.log_level);
    logging::init_logging(level, config.log_file.as_deref())?;
    debug!(?config, "loaded configuration");

    let mut filing = filing::load_from_file(&args.filing)
        .with_context(|| format!("Failed to load filing: {}", args.filing.display()))?;

    if let Some(path) = &args.vehicles {
        let vehicles = vehicle_csv::load_from_file(path)
            .with_context(|| format!("Failed to load vehicles: {}", path.display()))?;
        if !filing.vehicles.is_empty() {
            warn!(
                replaced = filing.vehicles.len(),
                "vehicle CSV replaces the vehicles in the filing"
            );
        }
        filing.vehicles = vehicles;
    }
    info!(vehicles = filing.vehicles.len(), "loaded filing");

    let engine = FilingEngine::new(RateTables::irs(), config.validation());
    let report = engine.evaluate(&filing, args.captcha.as_deref());

    let output = if args.compact || !config.pretty {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    }
    .context("Failed to serialize report")?;
    println!("{output}");

    if let Some(error) = &report.validation_error {
        warn!(%error, "filing is not ready to submit");
    }

    Ok(())
}
