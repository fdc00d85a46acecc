use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Assumed rates for a single year, in percentage points (`5.25` means 5.25%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyRate {
    pub year: i32,
    pub growth_percent: Decimal,
    pub inflation_percent: Decimal,
}

impl YearlyRate {
    pub fn new(
        year: i32,
        growth_percent: Decimal,
        inflation_percent: Decimal,
    ) -> Self {
        Self {
            year,
            growth_percent,
            inflation_percent,
        }
    }
}
