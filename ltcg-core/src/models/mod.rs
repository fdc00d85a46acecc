mod calculation_result;
mod rate_table;
mod yearly_rate;

pub use calculation_result::CalculationResult;
pub use rate_table::{MissingRateError, RateTable};
pub use yearly_rate::YearlyRate;
