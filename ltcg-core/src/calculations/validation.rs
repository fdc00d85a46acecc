//! Input predicates shared by the calculator and the front ends.
//!
//! These are pure checks. Re-prompting or reporting an invalid value is left
//! to the caller.

use rust_decimal::Decimal;

use super::GainCalculatorConfig;

/// Whether `year` falls inside the supported `[min_year, max_year]` window.
pub fn is_valid_year(
    year: i32,
    config: &GainCalculatorConfig,
) -> bool {
    (config.min_year..=config.max_year).contains(&year)
}

/// Whether `sell_year` is a supported year strictly after `buy_year`.
pub fn is_valid_sell_year(
    buy_year: i32,
    sell_year: i32,
    config: &GainCalculatorConfig,
) -> bool {
    is_valid_year(sell_year, config) && sell_year > buy_year
}

/// Whether a holding period can be projected.
///
/// Only the outer bounds are checked: `buy_year >= min_year`,
/// `sell_year <= max_year` and `buy_year < sell_year`.
pub fn is_valid_range(
    buy_year: i32,
    sell_year: i32,
    config: &GainCalculatorConfig,
) -> bool {
    buy_year >= config.min_year && sell_year <= config.max_year && buy_year < sell_year
}

/// Prices must be strictly positive.
pub fn is_valid_price(price: Decimal) -> bool {
    price > Decimal::ZERO
}

/// Parses a price typed by a user.
///
/// Surrounding whitespace is ignored and `,` group separators are removed, so
/// both `1,234.50` and `1,00,000` are accepted. Returns `None` for empty or
/// unparseable input.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ltcg_core::calculations::validation::parse_price;
///
/// assert_eq!(parse_price(" 1,00,000 "), Some(dec!(100000)));
/// assert_eq!(parse_price("abc"), None);
/// ```
pub fn parse_price(input: &str) -> Option<Decimal> {
    let normalized = input.trim().replace(',', "");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().ok()
}
