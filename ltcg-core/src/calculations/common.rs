//! Rounding and comparison helpers shared by the gain calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Equivalent to scaling by 100, rounding to the nearest integer and dividing
/// by 100 again: values at exactly 0.005 move away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ltcg_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(110.254)), dec!(110.25));
/// assert_eq!(round_half_up(dec!(110.255)), dec!(110.26));
/// assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ltcg_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-10.75), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Converts a percentage in points (`5.25`) into a growth factor (`1.0525`).
pub fn percent_to_factor(percent: Decimal) -> Decimal {
    Decimal::ONE + percent / Decimal::ONE_HUNDRED
}
