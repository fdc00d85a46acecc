use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use ltcg_core::{RateTable, YearlyRate};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading rate data.
#[derive(Debug, Error)]
pub enum RateTableLoaderError {
    #[error("Unable to open file: {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid {field} '{value}' on line {line}")]
    FileParse {
        field: &'static str,
        value: String,
        line: u64,
    },

    #[error("Unable to read rate data: {0}")]
    Read(#[from] io::Error),

    #[error("TSV read error: {0}")]
    Csv(String),
}

impl From<csv::Error> for RateTableLoaderError {
    fn from(err: csv::Error) -> Self {
        RateTableLoaderError::Csv(err.to_string())
    }
}

/// Loader for yearly growth and inflation rates from tab-separated files.
///
/// The first line is a header and is discarded whatever it holds, even when
/// blank. It is followed by rows of:
/// - `year`: a label whose first four characters are the year (e.g. `2015-16`)
/// - `growth`: assumed price growth in percentage points (e.g. `7.5`)
/// - `inflation`: inflation in percentage points, used for cost indexation
///
/// Rows with fewer than three fields are skipped. A year, growth or inflation
/// value that does not parse fails the whole load.
pub struct RateTableLoader;

impl RateTableLoader {
    /// Parse a rate table from a TSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or a
    /// string slice.
    ///
    /// ```
    /// use ltcg_data::RateTableLoader;
    ///
    /// let tsv = "Year\tGrowth\tInflation\n2010-11\t10\t5\n2011-12\t0\t5\n";
    /// let table = RateTableLoader::parse(tsv.as_bytes()).unwrap();
    ///
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.first_year(), Some(2010));
    /// ```
    pub fn parse<R: Read>(reader: R) -> Result<RateTable, RateTableLoaderError> {
        // csv would skip a blank first line and take the next row as the header
        let mut reader = BufReader::new(reader);
        let mut header = Vec::new();
        reader.read_until(b'\n', &mut header)?;

        let mut tsv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true) // short rows are skipped below, not rejected
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rates = Vec::new();
        let mut skipped = 0;

        for result in tsv_reader.records() {
            let record = result?;
            match parse_record(&record)? {
                Some(rate) => rates.push(rate),
                None => {
                    skipped += 1;
                    debug!(line = line_number(&record), "skipping malformed row");
                }
            }
        }

        let table = RateTable::from_rates(rates);
        info!(
            records = table.len(),
            skipped, "Loaded {} records from file.", table.len()
        );

        Ok(table)
    }

    /// Open `path` and delegate to [`RateTableLoader::parse`].
    pub fn load_from_file(path: &Path) -> Result<RateTable, RateTableLoaderError> {
        let file = File::open(path).map_err(|source| RateTableLoaderError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(file)
    }
}

/// Physical line of `record`, counting the discarded header line.
fn line_number(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line() + 1)
}

/// Converts one row into a rate. `Ok(None)` means the row is too short to use.
fn parse_record(record: &StringRecord) -> Result<Option<YearlyRate>, RateTableLoaderError> {
    let (Some(label), Some(growth), Some(inflation)) = (record.get(0), record.get(1), record.get(2))
    else {
        return Ok(None);
    };

    let line = line_number(record);
    let year = parse_year(label).ok_or_else(|| RateTableLoaderError::FileParse {
        field: "year",
        value: label.to_string(),
        line,
    })?;
    let growth_percent = parse_percent("growth", growth, line)?;
    let inflation_percent = parse_percent("inflation", inflation, line)?;

    Ok(Some(YearlyRate::new(year, growth_percent, inflation_percent)))
}

/// Reads the year from the first four characters of a label.
///
/// `2015-16` and `2015` both give 2015. Shorter labels are parsed whole.
fn parse_year(label: &str) -> Option<i32> {
    let prefix = label.get(..4).unwrap_or(label);
    prefix.parse().ok()
}

fn parse_percent(
    field: &'static str,
    value: &str,
    line: u64,
) -> Result<Decimal, RateTableLoaderError> {
    value.parse().map_err(|_| RateTableLoaderError::FileParse {
        field,
        value: value.to_string(),
        line,
    })
}
