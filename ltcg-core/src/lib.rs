pub mod calculations;
pub mod models;

pub use calculations::{GainCalculator, GainCalculatorConfig, GainCalculatorError};
pub use models::*;
