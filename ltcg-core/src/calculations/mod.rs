//! Capital gains calculations over a [`RateTable`](crate::RateTable).
//!
//! This module provides the selling price projection, the indexed LTCG tax,
//! and the input predicates the front ends validate against.

pub mod common;
pub mod gain;
pub mod validation;

pub use gain::{GainCalculator, GainCalculatorConfig, GainCalculatorError};
