//! Tabular model shared by CSV and spreadsheet content.
//!
//! Both readers produce raw cells that go through the same two-pass build:
//! every column is first classified as [`ColumnKind::Numeric`] or
//! [`ColumnKind::NonNumeric`] by scanning all of its values, then each cell is
//! converted according to its column's kind. Equivalent content therefore
//! yields an identical [`Table`] whichever reader it came from.

mod error;
mod number;
mod spreadsheet;

use std::collections::HashMap;

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use tracing::debug;

pub use error::TableError;
pub use number::format_number;

use number::{is_missing, parse_number};

/// A single converted table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing value (empty field or a missing-value marker).
    Empty,
    /// Value of a numeric column.
    Number(f64),
    /// Value of a non-numeric column.
    Text(String),
}

/// Column type derived by scanning every value in the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// At least one non-missing value, and every non-missing value is a number.
    Numeric,
    /// Anything else, including columns with no values at all.
    NonNumeric,
}

/// A cell as read from the source, before column typing.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawCell {
    Missing,
    Number(f64),
    Text(String),
    /// Date, time or duration value. Never counts as a number.
    Temporal(String),
}

impl RawCell {
    fn from_field(field: &str) -> Self {
        if is_missing(field) {
            Self::Missing
        } else {
            Self::Text(field.to_string())
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => parse_number(text),
            Self::Missing | Self::Temporal(_) => None,
        }
    }
}

/// A table with named columns and typed cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    kinds: Vec<ColumnKind>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Parses CSV text. The first record is the header row.
    ///
    /// Empty lines are skipped. A line of bare delimiters (`,,`) is a row of
    /// [`Cell::Empty`], the same as a blank worksheet row. Rows shorter than the header are padded with
    /// [`Cell::Empty`]; rows longer than the header are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Empty`] when there is no header row,
    /// [`TableError::RaggedRow`] for over-long rows and [`TableError::Csv`]
    /// for malformed CSV.
    pub fn from_csv_str(content: &str) -> Result<Self, TableError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(TableError::Empty);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() > headers.len() {
                return Err(TableError::RaggedRow {
                    line: record.position().map_or(0, csv::Position::line),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            rows.push(record.iter().map(RawCell::from_field).collect());
        }

        Ok(Self::from_raw(headers, rows))
    }

    /// Builds a table from headers and raw rows, typing every column first.
    pub(crate) fn from_raw(headers: Vec<String>, mut rows: Vec<Vec<RawCell>>) -> Self {
        let headers = dedupe_headers(headers);
        let width = headers.len();
        for row in &mut rows {
            row.resize(width, RawCell::Missing);
        }

        let kinds: Vec<ColumnKind> = (0..width).map(|col| classify(&rows, col)).collect();
        debug!(columns = width, rows = rows.len(), ?kinds, "typed table columns");

        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&kinds)
                    .map(|(raw, kind)| convert(raw, *kind))
                    .collect()
            })
            .collect();

        Self {
            headers,
            kinds,
            rows,
        }
    }

    /// Column names in source order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows (header excluded), each with one cell per column.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Kind of the column at `index`, if it exists.
    #[must_use]
    pub fn column_kind(&self, index: usize) -> Option<ColumnKind> {
        self.kinds.get(index).copied()
    }

    /// Non-missing numbers of the column at `index`, in row order.
    ///
    /// Empty for non-numeric or unknown columns.
    #[must_use]
    pub fn numeric_values(&self, index: usize) -> Vec<f64> {
        if self.column_kind(index) != Some(ColumnKind::Numeric) {
            return Vec::new();
        }
        self.rows
            .iter()
            .filter_map(|row| match row.get(index) {
                Some(Cell::Number(value)) => Some(*value),
                _ => None,
            })
            .collect()
    }

    /// Serializes the table as comma-delimited CSV with a header row and no index column.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if the CSV writer fails.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>, TableError> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|cell| match cell {
                Cell::Empty => String::new(),
                Cell::Number(value) => format_number(*value),
                Cell::Text(text) => text.clone(),
            }))?;
        }
        writer.into_inner().map_err(|e| TableError::Io(e.into_error()))
    }
}

fn classify(rows: &[Vec<RawCell>], col: usize) -> ColumnKind {
    let mut seen_value = false;
    for row in rows {
        match &row[col] {
            RawCell::Missing => {}
            raw => {
                if raw.as_number().is_none() {
                    return ColumnKind::NonNumeric;
                }
                seen_value = true;
            }
        }
    }
    if seen_value {
        ColumnKind::Numeric
    } else {
        ColumnKind::NonNumeric
    }
}

fn convert(raw: RawCell, kind: ColumnKind) -> Cell {
    match (raw, kind) {
        (RawCell::Missing, _) => Cell::Empty,
        (raw, ColumnKind::Numeric) => raw.as_number().map_or(Cell::Empty, Cell::Number),
        (RawCell::Number(value), ColumnKind::NonNumeric) => Cell::Text(format_number(value)),
        (RawCell::Text(text) | RawCell::Temporal(text), ColumnKind::NonNumeric) => {
            Cell::Text(text)
        }
    }
}

/// Names blank headers `Unnamed: <index>` and suffixes repeats with `.1`, `.2`, ...
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    headers
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let name = if name.trim().is_empty() {
                format!("Unnamed: {index}")
            } else {
                name
            };
            let count = counts.entry(name.clone()).or_insert(0);
            let unique = if *count == 0 {
                name
            } else {
                format!("{name}.{count}")
            };
            *count += 1;
            unique
        })
        .collect()
}
