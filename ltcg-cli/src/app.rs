use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use ltcg_core::calculations::validation::{is_valid_price, is_valid_sell_year, is_valid_year};
use ltcg_core::{CalculationResult, GainCalculator, GainCalculatorConfig};
use ltcg_data::RateTableLoader;
use rust_decimal::Decimal;
use tracing::debug;

use crate::prompt::Prompter;

/// Inputs for one run. Values left as `None` are asked for interactively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub rates: PathBuf,
    pub buy_year: Option<i32>,
    pub sell_year: Option<i32>,
    pub initial_price: Option<Decimal>,
}

/// Loads the rate file, gathers any missing inputs from `input`, runs the
/// calculation and writes the summary to `output`.
pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    input: R,
    mut output: W,
) -> Result<CalculationResult> {
    let table = RateTableLoader::load_from_file(&options.rates)?;

    let config = GainCalculatorConfig::default();
    let mut prompter = Prompter::new(input, &mut output, config.clone());

    let buy_year = match options.buy_year {
        Some(year) => {
            ensure!(
                is_valid_year(year, &config),
                "purchase year {year} must be between {} and {}",
                config.min_year,
                config.max_year
            );
            year
        }
        None => prompter.buy_year()?,
    };

    let sell_year = match options.sell_year {
        Some(year) => {
            ensure!(
                is_valid_sell_year(buy_year, year, &config),
                "sale year {year} must be between {} and {}",
                buy_year + 1,
                config.max_year
            );
            year
        }
        None => prompter.sell_year(buy_year)?,
    };

    let initial_price = match options.initial_price {
        Some(price) => {
            ensure!(is_valid_price(price), "initial price {price} must be positive");
            price
        }
        None => prompter.initial_price()?,
    };

    debug!(buy_year, sell_year, initial_price = %initial_price, "inputs collected");

    let calculator = GainCalculator::with_config(&table, config);
    let result = calculator
        .calculate(buy_year, sell_year, initial_price)
        .context("Calculation failed")?;

    write_summary(&mut output, &result)?;

    Ok(result)
}

/// Prints the two reported figures with two decimal places.
pub fn write_summary<W: Write>(
    mut output: W,
    result: &CalculationResult,
) -> std::io::Result<()> {
    writeln!(
        output,
        "Estimated selling price: Rs. {:.2} lakhs",
        result.selling_price
    )?;
    writeln!(
        output,
        "LTCG (with indexation): Rs. {:.2} lakhs",
        result.ltcg_tax
    )
}
