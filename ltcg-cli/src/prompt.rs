//! Interactive console input.
//!
//! Each question is repeated until the answer passes the matching predicate
//! from [`ltcg_core::calculations::validation`].

use std::io::{self, BufRead, Write};

use ltcg_core::GainCalculatorConfig;
use ltcg_core::calculations::validation::{
    is_valid_price, is_valid_sell_year, is_valid_year, parse_price,
};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream ended before a valid answer was read.
    #[error("input closed before a valid {0} was entered")]
    InputClosed(&'static str),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    config: GainCalculatorConfig,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(
        input: R,
        output: W,
        config: GainCalculatorConfig,
    ) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    pub fn buy_year(&mut self) -> Result<i32, PromptError> {
        let config = self.config.clone();
        let (min, max) = (config.min_year, config.max_year);

        self.ask(
            "purchase year",
            &format!("Enter the year of purchase ({min}-{max}): "),
            &format!("Invalid input. Please enter a year between {min} and {max}."),
            |line| parse_year(line).filter(|year| is_valid_year(*year, &config)),
        )
    }

    pub fn sell_year(
        &mut self,
        buy_year: i32,
    ) -> Result<i32, PromptError> {
        let config = self.config.clone();
        let (min, max) = (config.min_year, config.max_year);

        self.ask(
            "sale year",
            &format!("Enter the year of selling ({min}-{max}): "),
            &format!(
                "Invalid input. Please enter a year between {} and {max}.",
                buy_year + 1
            ),
            |line| parse_year(line).filter(|year| is_valid_sell_year(buy_year, *year, &config)),
        )
    }

    pub fn initial_price(&mut self) -> Result<Decimal, PromptError> {
        self.ask(
            "initial price",
            "Enter the initial price (in lakhs): ",
            "Invalid input. Please enter a positive number.",
            |line| parse_price(line).filter(|price| is_valid_price(*price)),
        )
    }

    fn ask<T>(
        &mut self,
        what: &'static str,
        question: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, PromptError> {
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::InputClosed(what));
            }

            if let Some(value) = parse(&line) {
                return Ok(value);
            }

            debug!(input = line.trim(), "rejected {what}");
            writeln!(self.output, "{retry}")?;
        }
    }
}

fn parse_year(line: &str) -> Option<i32> {
    line.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn prompter<'a>(
        input: &'a str,
        output: &'a mut Vec<u8>,
    ) -> Prompter<&'a [u8], &'a mut Vec<u8>> {
        Prompter::new(input.as_bytes(), output, GainCalculatorConfig::default())
    }

    #[test]
    fn buy_year_accepts_valid_answer() {
        let mut output = Vec::new();

        let year = prompter("2015\n", &mut output).buy_year().unwrap();

        assert_eq!(year, 2015);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter the year of purchase (2002-2030): "
        );
    }

    #[test]
    fn buy_year_reprompts_until_valid() {
        let mut output = Vec::new();

        let year = prompter("abc\n2001\n 2002 \n", &mut output)
            .buy_year()
            .unwrap();

        assert_eq!(year, 2002);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text.matches("Invalid input. Please enter a year between 2002 and 2030.")
                .count(),
            2
        );
        assert_eq!(text.matches("Enter the year of purchase").count(), 3);
    }

    #[test]
    fn sell_year_must_follow_buy_year() {
        let mut output = Vec::new();

        let year = prompter("2010\n2031\n2011\n", &mut output)
            .sell_year(2010)
            .unwrap();

        assert_eq!(year, 2011);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text.matches("Please enter a year between 2011 and 2030.")
                .count(),
            2
        );
    }

    #[test]
    fn initial_price_rejects_non_positive() {
        let mut output = Vec::new();

        let price = prompter("0\n-5\nten\n1,250.75\n", &mut output)
            .initial_price()
            .unwrap();

        assert_eq!(price, dec!(1250.75));
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Please enter a positive number.").count(), 3);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut output = Vec::new();

        let result = prompter("abc\n", &mut output).buy_year();

        let Err(PromptError::InputClosed(what)) = result else {
            panic!("expected InputClosed, got {result:?}");
        };
        assert_eq!(what, "purchase year");
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut output = Vec::new();

        let price = prompter("99.5", &mut output).initial_price().unwrap();

        assert_eq!(price, dec!(99.5));
    }
}
