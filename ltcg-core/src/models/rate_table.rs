use std::collections::BTreeMap;
use std::ops::Range;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::YearlyRate;

/// Returned when a year that must have data has none.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("no inflation data available for year {year}")]
pub struct MissingRateError {
    pub year: i32,
}

/// Growth and inflation rates keyed by year.
///
/// Built once from a rate source and read-only afterwards. Holds at most one
/// [`YearlyRate`] per year.
///
/// Lookups are asymmetric: a missing growth rate is reported as
/// `None`, while a missing inflation rate is an error.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use ltcg_core::{RateTable, YearlyRate};
///
/// let table = RateTable::from_rates([
///     YearlyRate::new(2010, dec!(10), dec!(5)),
///     YearlyRate::new(2011, dec!(0), dec!(5)),
/// ]);
///
/// assert_eq!(table.growth_rate(2010), Some(dec!(10)));
/// assert_eq!(table.growth_rate(2012), None);
/// assert!(table.inflation_rate(2012).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    rates: BTreeMap<i32, YearlyRate>,
}

impl RateTable {
    /// Builds a table from `rates`.
    ///
    /// If a year occurs more than once the first record is kept and the
    /// later ones are dropped with a warning.
    pub fn from_rates<I>(rates: I) -> Self
    where
        I: IntoIterator<Item = YearlyRate>,
    {
        let mut table: BTreeMap<i32, YearlyRate> = BTreeMap::new();

        for rate in rates {
            if let Some(existing) = table.get(&rate.year) {
                warn!(
                    year = rate.year,
                    kept_growth = %existing.growth_percent,
                    kept_inflation = %existing.inflation_percent,
                    "duplicate rate record ignored"
                );
                continue;
            }
            table.insert(rate.year, rate);
        }

        Self { rates: table }
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn get(
        &self,
        year: i32,
    ) -> Option<&YearlyRate> {
        self.rates.get(&year)
    }

    /// Growth rate for `year` in percentage points, if the table has one.
    pub fn growth_rate(
        &self,
        year: i32,
    ) -> Option<Decimal> {
        self.rates.get(&year).map(|r| r.growth_percent)
    }

    /// Inflation rate for `year` in percentage points.
    ///
    /// # Errors
    ///
    /// Returns [`MissingRateError`] when the table has no record for `year`.
    pub fn inflation_rate(
        &self,
        year: i32,
    ) -> Result<Decimal, MissingRateError> {
        self.rates
            .get(&year)
            .map(|r| r.inflation_percent)
            .ok_or(MissingRateError { year })
    }

    /// All records in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = &YearlyRate> {
        self.rates.values()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.rates.keys().next().copied()
    }

    pub fn last_year(&self) -> Option<i32> {
        self.rates.keys().next_back().copied()
    }

    /// Years in `years` with no record, in ascending order.
    pub fn missing_years(
        &self,
        years: Range<i32>,
    ) -> Vec<i32> {
        years.filter(|y| !self.rates.contains_key(y)).collect()
    }
}

impl FromIterator<YearlyRate> for RateTable {
    fn from_iter<I: IntoIterator<Item = YearlyRate>>(iter: I) -> Self {
        Self::from_rates(iter)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_table() -> RateTable {
        RateTable::from_rates([
            YearlyRate::new(2012, dec!(7.5), dec!(6.0)),
            YearlyRate::new(2010, dec!(10), dec!(5)),
            YearlyRate::new(2011, dec!(0), dec!(5.25)),
        ])
    }

    #[test]
    fn from_rates_orders_by_year() {
        let table = sample_table();

        let years: Vec<i32> = table.iter().map(|r| r.year).collect();

        assert_eq!(years, vec![2010, 2011, 2012]);
        assert_eq!(table.first_year(), Some(2010));
        assert_eq!(table.last_year(), Some(2012));
    }

    #[test]
    fn from_rates_keeps_first_duplicate() {
        let table = RateTable::from_rates([
            YearlyRate::new(2010, dec!(10), dec!(5)),
            YearlyRate::new(2010, dec!(99), dec!(99)),
        ]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.growth_rate(2010), Some(dec!(10)));
        assert_eq!(table.inflation_rate(2010), Ok(dec!(5)));
    }

    #[test]
    fn growth_rate_missing_year_is_none() {
        let table = sample_table();

        assert_eq!(table.growth_rate(2009), None);
    }

    #[test]
    fn inflation_rate_missing_year_is_error() {
        let table = sample_table();

        let result = table.inflation_rate(2009);

        assert_eq!(result, Err(MissingRateError { year: 2009 }));
    }

    #[test]
    fn inflation_rate_present_year() {
        let table = sample_table();

        assert_eq!(table.inflation_rate(2011), Ok(dec!(5.25)));
    }

    #[test]
    fn missing_years_reports_gaps() {
        let table = sample_table();

        assert_eq!(table.missing_years(2008..2014), vec![2008, 2009, 2013]);
        assert!(table.missing_years(2010..2013).is_empty());
    }

    #[test]
    fn empty_table() {
        let table: RateTable = std::iter::empty::<YearlyRate>().collect();

        assert!(table.is_empty());
        assert_eq!(table.first_year(), None);
        assert_eq!(table.last_year(), None);
    }

    #[test]
    fn missing_rate_error_message() {
        let err = MissingRateError { year: 2015 };

        assert_eq!(err.to_string(), "no inflation data available for year 2015");
    }
}
