use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ltcg_core::calculations::validation::parse_price;
use rust_decimal::Decimal;
use tracing::debug;

use ltcg_cli::app::{self, RunOptions};
use ltcg_cli::logging;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Long-term capital gains estimator with cost indexation.
///
/// Loads yearly growth and inflation rates, projects the selling price of an
/// asset and prints the LTCG tax on the indexed profit. Inputs not given as
/// flags are asked for interactively.
#[derive(Debug, Parser)]
#[command(name = "ltcg", version, about)]
struct Cli {
    /// Tab-separated file of yearly growth and inflation rates.
    #[arg(long, default_value = "price-inflation.tsv")]
    rates: PathBuf,

    /// Year of purchase (2002-2030).
    #[arg(long)]
    buy_year: Option<i32>,

    /// Year of sale (after the purchase year, up to 2030).
    #[arg(long)]
    sell_year: Option<i32>,

    /// Purchase price in lakhs.
    #[arg(long, value_parser = parse_price_arg)]
    price: Option<Decimal>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_price_arg(s: &str) -> Result<Decimal, String> {
    parse_price(s).ok_or_else(|| format!("'{s}' is not a number"))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(error) = logging::enable_file_logging(path) {
            eprintln!("Error: {error:#}");
            return ExitCode::FAILURE;
        }
    }

    let options = RunOptions {
        rates: cli.rates,
        buy_year: cli.buy_year,
        sell_year: cli.sell_year,
        initial_price: cli.price,
    };
    debug!(?options, "starting");

    match app::run(&options, io::stdin().lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
