//! Error types for tabular parsing and serialization.

use thiserror::Error;

/// Errors that can occur while building or serializing a [`Table`](super::Table).
#[derive(Debug, Error)]
pub enum TableError {
    /// The input has no header row.
    #[error("no columns to parse: input is empty")]
    Empty,

    /// A data row has more fields than the header declares.
    #[error("expected {expected} fields on line {line}, saw {found}")]
    RaggedRow {
        /// 1-based line number of the offending record.
        line: u64,
        /// Number of header columns.
        expected: usize,
        /// Number of fields in the record.
        found: usize,
    },

    /// The CSV reader or writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The workbook could not be opened or read.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// The workbook contains no worksheet.
    #[error("workbook contains no worksheet")]
    NoWorksheet,

    /// Flushing serialized output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
