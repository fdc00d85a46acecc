use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ltcg_core::GainCalculatorConfig;
use ltcg_data::RateTableLoader;
use tracing_subscriber::EnvFilter;

/// Check a growth/inflation rate file and report its coverage.
///
/// The file should be tab-separated with one header line and the columns:
/// - year: a label starting with the year (e.g. 2015 or 2015-16)
/// - growth: assumed price growth in percent (e.g. 7.5)
/// - inflation: inflation in percent, used for cost indexation
#[derive(Parser, Debug)]
#[command(name = "ltcg-rates")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the TSV file containing yearly rates
    #[arg(short, long, default_value = "price-inflation.tsv")]
    file: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    println!("Loading rates from: {}", args.file.display());

    let table = RateTableLoader::load_from_file(&args.file)
        .with_context(|| format!("Failed to load rates: {}", args.file.display()))?;

    println!("Loaded {} records from file.", table.len());

    let (Some(first), Some(last)) = (table.first_year(), table.last_year()) else {
        println!("The file contains no usable rows.");
        return Ok(());
    };
    println!("Years covered: {first} to {last}");

    // Projections read rates for [min_year, max_year), never max_year itself.
    let config = GainCalculatorConfig::default();
    let missing = table.missing_years(config.min_year..config.max_year);

    if missing.is_empty() {
        println!(
            "Every year from {} to {} has data.",
            config.min_year,
            config.max_year - 1
        );
    } else {
        let years: Vec<String> = missing.iter().map(ToString::to_string).collect();
        println!(
            "Missing years (growth is skipped, indexation fails): {}",
            years.join(", ")
        );
    }

    Ok(())
}
