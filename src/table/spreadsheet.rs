//! Spreadsheet reader: first worksheet of a workbook as a [`Table`].

use std::io::Cursor;

use calamine::{Data, DataType, Range, Reader, open_workbook_auto_from_rs};
use tracing::debug;

use super::{RawCell, Table, TableError};

impl Table {
    /// Reads the first worksheet of a workbook held in memory.
    ///
    /// Both legacy (`.xls`) and modern (`.xlsx`, `.ods`) workbooks are
    /// accepted; the format is detected from the content.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Spreadsheet`] if the workbook cannot be read,
    /// [`TableError::NoWorksheet`] if it has no sheet and
    /// [`TableError::Empty`] if the first sheet has no header row.
    pub fn from_spreadsheet_bytes(bytes: &[u8]) -> Result<Self, TableError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(TableError::NoWorksheet)??;
        Self::from_range(&range)
    }

    /// Builds a table from a worksheet range. The first row is the header row.
    ///
    /// Blank rows inside the range are kept as rows of missing values, as a
    /// line of bare delimiters is in CSV.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Empty`] if the range has no rows.
    pub fn from_range(range: &Range<Data>) -> Result<Self, TableError> {
        let mut rows = range.rows();
        let Some(header_row) = rows.next() else {
            return Err(TableError::Empty);
        };
        let headers: Vec<String> = header_row.iter().map(header_name).collect();
        let raw_rows: Vec<Vec<RawCell>> = rows
            .map(|row| row.iter().map(raw_cell).collect())
            .collect();
        debug!(rows = raw_rows.len(), "read worksheet");
        Ok(Self::from_raw(headers, raw_rows))
    }
}

fn header_name(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn raw_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty | Data::Error(_) => RawCell::Missing,
        #[allow(clippy::cast_precision_loss)]
        Data::Int(value) => RawCell::Number(*value as f64),
        Data::Float(value) if value.is_nan() => RawCell::Missing,
        Data::Float(value) => RawCell::Number(*value),
        Data::String(text) => RawCell::from_field(text),
        Data::Bool(value) => RawCell::Text(if *value { "True" } else { "False" }.to_string()),
        // Dates display as their serial number; render them so they stay text.
        Data::DateTime(_) | Data::DateTimeIso(_) => RawCell::Temporal(
            cell.as_datetime()
                .map_or_else(|| cell.to_string(), |datetime| datetime.to_string()),
        ),
        Data::DurationIso(text) => RawCell::Temporal(text.clone()),
    }
}
