//! Integration tests loading rate files from disk and running calculations on them.

use std::path::{Path, PathBuf};

use ltcg_core::calculations::common::{percent_to_factor, round_half_up};
use ltcg_core::{GainCalculator, GainCalculatorError, MissingRateError, YearlyRate};
use ltcg_data::{RateTableLoader, RateTableLoaderError};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join(name)
}

#[test]
fn test_load_full_rate_file() {
    let table = RateTableLoader::load_from_file(&fixture("price-inflation.tsv"))
        .expect("Failed to load rates");

    assert_eq!(table.len(), 29);
    assert_eq!(table.first_year(), Some(2001));
    assert_eq!(table.last_year(), Some(2029));
    assert!(table.missing_years(2002..2030).is_empty());
    assert_eq!(
        table.get(2008),
        Some(&YearlyRate::new(2008, dec!(-4.00), dec!(10.90)))
    );
}

#[test]
fn test_full_window_projection_matches_product() {
    let table = RateTableLoader::load_from_file(&fixture("price-inflation.tsv"))
        .expect("Failed to load rates");
    let calculator = GainCalculator::new(&table);

    let result = calculator
        .calculate(2002, 2030, dec!(25.00))
        .expect("Calculation should succeed");

    let expected = table
        .iter()
        .filter(|r| (2002..2030).contains(&r.year))
        .fold(dec!(25.00), |price, r| price * percent_to_factor(r.growth_percent));

    assert_eq!(result.selling_price, round_half_up(expected));
    assert!(result.ltcg_tax >= Decimal::ZERO);
}

#[test]
fn test_load_file_with_gaps_skips_short_row() {
    let table = RateTableLoader::load_from_file(&fixture("rates_with_gaps.tsv"))
        .expect("Failed to load rates");

    // 2012-13 has only two fields; 2014 is absent entirely.
    assert_eq!(table.len(), 4);
    assert_eq!(table.missing_years(2010..2016), vec![2012, 2014]);
    assert_eq!(table.growth_rate(2013), Some(dec!(8.00)));
}

#[test]
fn test_scenario_sale_below_indexed_cost() {
    let table = RateTableLoader::load_from_file(&fixture("rates_with_gaps.tsv"))
        .expect("Failed to load rates");
    let calculator = GainCalculator::new(&table);

    let result = calculator
        .calculate(2010, 2012, dec!(100.00))
        .expect("Calculation should succeed");

    assert_eq!(result.selling_price, dec!(110.00));
    assert_eq!(result.indexed_cost, dec!(110.25));
    assert_eq!(result.ltcg_tax, dec!(0.00));
}

#[test]
fn test_growth_gap_is_skipped_but_inflation_gap_fails() {
    let table = RateTableLoader::load_from_file(&fixture("rates_with_gaps.tsv"))
        .expect("Failed to load rates");
    let calculator = GainCalculator::new(&table);

    let selling_price = calculator
        .project_selling_price(2013, 2016, dec!(100.00))
        .expect("Projection should skip the missing year");

    // 100 * 1.08 * 1.04, with 2014 left flat
    assert_eq!(selling_price, dec!(112.32));

    let result = calculator.compute_ltcg(dec!(100.00), selling_price, 2013, 2016);

    assert_eq!(
        result,
        Err(GainCalculatorError::MissingData(MissingRateError {
            year: 2014
        }))
    );
}

#[test]
fn test_missing_file_reports_open_error() {
    let result = RateTableLoader::load_from_file(&fixture("no-such-file.tsv"));

    let Err(RateTableLoaderError::FileOpen { path, .. }) = result else {
        panic!("expected FileOpen, got {result:?}");
    };
    assert!(path.ends_with("no-such-file.tsv"));
}
