use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    // Inputs
    pub buy_year: i32,
    pub sell_year: i32,
    pub initial_price: Decimal,

    // Diagnostics (unrounded)
    pub indexed_cost: Decimal,
    pub profit: Decimal,

    // Reported figures, rounded to two decimal places
    pub selling_price: Decimal,
    pub ltcg_tax: Decimal,
}
