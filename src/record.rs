//! Expense records and CSV parsing.
//!
//! The CSV carries German column names (`Betrag`, `Kategorie`, `Ausgabe`,
//! `Ortschaft`) next to `lat` and `lon`. Rows that cannot be used are logged
//! and skipped so one bad line never blanks the whole map.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::Deserialize;

use crate::error::MapError;
use crate::nest::NestKey;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 6] = ["lat", "lon", "Betrag", "Kategorie", "Ausgabe", "Ortschaft"];

/// A single travel expense. Immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    /// Place where the expense occurred.
    pub location: String,
    /// Expense category; drives color and legend grouping.
    pub category: String,
    /// Amount in the configured currency.
    pub amount: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Free-text description of the expense.
    pub description: String,
}

impl ExpenseRecord {
    /// Key of the nest this record belongs to.
    #[must_use]
    pub fn nest_key(&self) -> NestKey {
        NestKey::new(self.lat, self.lon)
    }
}

/// Raw CSV row as it appears on disk.
#[derive(Debug, Deserialize)]
struct CsvRow {
    lat: f64,
    lon: f64,
    #[serde(rename = "Betrag")]
    amount: f64,
    #[serde(rename = "Kategorie")]
    category: String,
    #[serde(rename = "Ausgabe")]
    description: String,
    #[serde(rename = "Ortschaft")]
    location: String,
}

/// Why a row was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowProblem {
    NonFiniteCoordinate,
    LatitudeOutOfRange,
    LongitudeOutOfRange,
    NonFiniteAmount,
}

impl CsvRow {
    fn validate(&self) -> Result<(), RowProblem> {
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return Err(RowProblem::NonFiniteCoordinate);
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(RowProblem::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(RowProblem::LongitudeOutOfRange);
        }
        if !self.amount.is_finite() {
            return Err(RowProblem::NonFiniteAmount);
        }
        Ok(())
    }

    fn into_record(self) -> ExpenseRecord {
        ExpenseRecord {
            location: self.location,
            category: self.category,
            amount: self.amount,
            lon: self.lon,
            lat: self.lat,
            description: self.description,
        }
    }
}

/// Result of parsing the expense CSV.
#[derive(Debug, Clone, Default)]
pub struct ParsedRecords {
    /// Usable records in file order.
    pub records: Vec<ExpenseRecord>,
    /// Number of data rows that were logged and skipped.
    pub skipped: usize,
}

/// Parse the expense CSV.
///
/// Fields and headers are trimmed. Rows with unparseable numbers, non-finite
/// values, or coordinates outside the valid lat/lon range are skipped with a
/// warning.
///
/// # Errors
///
/// Returns [`MapError::Csv`] if the header row cannot be read and
/// [`MapError::MissingColumn`] if a required column is absent.
pub fn parse_csv(text: &str) -> Result<ParsedRecords, MapError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(MapError::MissingColumn(column));
        }
    }

    let mut parsed = ParsedRecords::default();
    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1.
        let line = index + 2;
        match row {
            Ok(row) => match row.validate() {
                Ok(()) => parsed.records.push(row.into_record()),
                Err(problem) => {
                    log::warn!("skipping expense row at line {line}: {problem:?}");
                    parsed.skipped += 1;
                }
            },
            Err(e) => {
                log::warn!("skipping expense row at line {line}: {e}");
                parsed.skipped += 1;
            }
        }
    }

    log::info!("parsed {} expense records ({} skipped)", parsed.records.len(), parsed.skipped);
    Ok(parsed)
}
