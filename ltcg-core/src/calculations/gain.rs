//! Long-term capital gains estimation with cost indexation.
//!
//! The calculation runs in two steps over a [`RateTable`]:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Selling price: purchase price compounded by each year's growth rate |
//! | 2a   | Indexed cost: purchase price compounded by each year's inflation rate |
//! | 2b   | Profit: selling price - indexed cost |
//! | 2c   | Tax: profit × 20% when profit is positive, otherwise 0 |
//!
//! Both steps cover the years `[buy_year, sell_year)`. A year without data is
//! treated differently by each step: growth is skipped (the price stays flat
//! that year) while indexation fails with [`GainCalculatorError::MissingData`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use ltcg_core::calculations::GainCalculator;
//! use ltcg_core::{RateTable, YearlyRate};
//!
//! let table = RateTable::from_rates([
//!     YearlyRate::new(2010, dec!(10), dec!(5)),
//!     YearlyRate::new(2011, dec!(10), dec!(5)),
//! ]);
//!
//! let calculator = GainCalculator::new(&table);
//! let result = calculator.calculate(2010, 2012, dec!(100.00)).unwrap();
//!
//! assert_eq!(result.selling_price, dec!(121.00));
//! assert_eq!(result.indexed_cost, dec!(110.25));
//! assert_eq!(result.ltcg_tax, dec!(2.15));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::calculations::common::{max, percent_to_factor, round_half_up};
use crate::calculations::validation::is_valid_range;
use crate::{CalculationResult, MissingRateError, RateTable};

/// Errors that can occur during a gain calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GainCalculatorError {
    /// The holding period is outside the supported years or not increasing.
    #[error("invalid buy or sell year: {buy_year} to {sell_year}")]
    InvalidRange { buy_year: i32, sell_year: i32 },

    /// A year in the holding period has no inflation rate.
    #[error(transparent)]
    MissingData(#[from] MissingRateError),

    /// An amount grew beyond what `Decimal` can represent.
    #[error("amount too large while computing {0}")]
    Overflow(&'static str),
}

/// Limits and rate for the calculation.
///
/// The [`Default`] value is the only formula in use: holding periods within
/// 2002 to 2030 and a flat 20% tax on indexed profit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GainCalculatorConfig {
    /// Earliest allowed purchase year.
    pub min_year: i32,

    /// Latest allowed sale year.
    pub max_year: i32,

    /// Tax rate applied to positive indexed profit, as a fraction.
    pub tax_rate: Decimal,
}

impl Default for GainCalculatorConfig {
    fn default() -> Self {
        Self {
            min_year: 2002,
            max_year: 2030,
            tax_rate: Decimal::new(20, 2),
        }
    }
}

/// Calculator for projected selling price and indexed LTCG tax.
///
/// Holds no state besides the borrowed table and its configuration, so a
/// single instance can serve any number of calculations.
#[derive(Debug, Clone)]
pub struct GainCalculator<'a> {
    rates: &'a RateTable,
    config: GainCalculatorConfig,
}

impl<'a> GainCalculator<'a> {
    /// Creates a calculator over `rates` with the default configuration.
    pub fn new(rates: &'a RateTable) -> Self {
        Self::with_config(rates, GainCalculatorConfig::default())
    }

    pub fn with_config(
        rates: &'a RateTable,
        config: GainCalculatorConfig,
    ) -> Self {
        Self { rates, config }
    }

    pub fn config(&self) -> &GainCalculatorConfig {
        &self.config
    }

    /// Runs both steps for a purchase at `initial_price`.
    ///
    /// # Errors
    ///
    /// Returns [`GainCalculatorError`] if:
    /// - The years fail the range check
    /// - Any year in the holding period has no inflation rate
    /// - An amount overflows
    pub fn calculate(
        &self,
        buy_year: i32,
        sell_year: i32,
        initial_price: Decimal,
    ) -> Result<CalculationResult, GainCalculatorError> {
        let selling_price = self.project_selling_price(buy_year, sell_year, initial_price)?;
        let (indexed_cost, profit) =
            self.indexed_profit(initial_price, selling_price, buy_year, sell_year)?;
        let ltcg_tax = self.tax_on_profit(profit)?;

        Ok(CalculationResult {
            buy_year,
            sell_year,
            initial_price,
            indexed_cost,
            profit,
            selling_price,
            ltcg_tax,
        })
    }

    /// Projects the selling price by compounding yearly growth.
    ///
    /// Years without a growth rate leave the price unchanged. The result is
    /// rounded to two decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`GainCalculatorError::InvalidRange`] unless
    /// `min_year <= buy_year < sell_year <= max_year`, or
    /// [`GainCalculatorError::Overflow`] if the price grows out of range.
    pub fn project_selling_price(
        &self,
        buy_year: i32,
        sell_year: i32,
        initial_price: Decimal,
    ) -> Result<Decimal, GainCalculatorError> {
        if !is_valid_range(buy_year, sell_year, &self.config) {
            return Err(GainCalculatorError::InvalidRange {
                buy_year,
                sell_year,
            });
        }

        info!(price = %initial_price, "initial price");

        let mut price = initial_price;
        for year in buy_year..sell_year {
            match self.rates.growth_rate(year) {
                Some(growth) => {
                    price = price
                        .checked_mul(percent_to_factor(growth))
                        .ok_or(GainCalculatorError::Overflow("selling price"))?;
                    info!(year, price = %price, growth = %growth, "applied growth");
                }
                None => warn!(year, "no growth data found; price unchanged"),
            }
        }

        Ok(round_half_up(price))
    }

    /// Computes the LTCG tax on a sale using an inflation-indexed cost.
    ///
    /// The indexed cost is not rounded; only the final tax is. Losses and
    /// break-even sales produce zero tax.
    ///
    /// # Errors
    ///
    /// Returns [`GainCalculatorError::MissingData`] when any year in
    /// `[buy_year, sell_year)` has no inflation rate, or
    /// [`GainCalculatorError::Overflow`] if an amount grows out of range.
    pub fn compute_ltcg(
        &self,
        buy_price: Decimal,
        sell_price: Decimal,
        buy_year: i32,
        sell_year: i32,
    ) -> Result<Decimal, GainCalculatorError> {
        let (_, profit) = self.indexed_profit(buy_price, sell_price, buy_year, sell_year)?;

        self.tax_on_profit(profit)
    }

    /// Returns `(indexed_cost, profit)` for a sale.
    fn indexed_profit(
        &self,
        buy_price: Decimal,
        sell_price: Decimal,
        buy_year: i32,
        sell_year: i32,
    ) -> Result<(Decimal, Decimal), GainCalculatorError> {
        let indexed_cost = self.indexed_cost(buy_price, buy_year, sell_year)?;
        let profit = sell_price
            .checked_sub(indexed_cost)
            .ok_or(GainCalculatorError::Overflow("profit"))?;

        info!(
            buy_price = %buy_price,
            indexed_cost = %indexed_cost,
            sell_price = %sell_price,
            profit = %profit,
            "indexed profit"
        );

        Ok((indexed_cost, profit))
    }

    /// Compounds `buy_price` by each year's inflation rate.
    fn indexed_cost(
        &self,
        buy_price: Decimal,
        buy_year: i32,
        sell_year: i32,
    ) -> Result<Decimal, GainCalculatorError> {
        let mut cost = buy_price;
        for year in buy_year..sell_year {
            let inflation = self.rates.inflation_rate(year)?;
            cost = cost
                .checked_mul(percent_to_factor(inflation))
                .ok_or(GainCalculatorError::Overflow("indexed cost"))?;
            debug!(year, indexed_cost = %cost, inflation = %inflation, "applied indexation");
        }
        Ok(cost)
    }

    /// Applies the flat rate to positive profit.
    fn tax_on_profit(
        &self,
        profit: Decimal,
    ) -> Result<Decimal, GainCalculatorError> {
        let taxable = max(profit, Decimal::ZERO);
        let tax = taxable
            .checked_mul(self.config.tax_rate)
            .ok_or(GainCalculatorError::Overflow("tax"))?;
        Ok(round_half_up(tax))
    }
}
