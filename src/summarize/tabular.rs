//! Row listing and numeric column statistics for tabular content.
//!
//! CSV and spreadsheet datasets share this summarizer; only the reader that
//! builds the [`Table`] differs, so equivalent content renders identically.

use std::fmt::Write as _;

use crate::stats::ColumnStatistics;
use crate::table::{Cell, ColumnKind, Table, format_number};

/// Rows of a table plus statistics for each numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    /// Data rows in source order, cells in column order.
    pub rows: Vec<Vec<Cell>>,
    /// Statistics per numeric column, in column order.
    pub stats: Vec<(String, ColumnStatistics)>,
}

impl TableSummary {
    /// Statistics for the column named `column`, if it is numeric.
    #[must_use]
    pub fn stats_for(&self, column: &str) -> Option<&ColumnStatistics> {
        self.stats
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, stats)| stats)
    }

    /// Renders the report file body.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("Rows as tuples:\n");
        for row in &self.rows {
            let _ = writeln!(out, "{}", render_row(row));
        }
        out.push_str("\nStatistics for numeric columns:\n");
        for (column, stats) in &self.stats {
            let _ = writeln!(out, "\n{column}:");
            let _ = writeln!(out, "Mean: {}", format_number(stats.mean));
            let _ = writeln!(out, "Median: {}", format_number(stats.median));
            let _ = writeln!(out, "Standard Deviation: {}", format_number(stats.std_dev));
            let _ = writeln!(out, "Max: {}", format_number(stats.max));
            let _ = writeln!(out, "Min: {}", format_number(stats.min));
        }
        out
    }
}

/// Summarizes `table`: every row, plus statistics for numeric columns.
///
/// Non-numeric columns are left out of the statistics entirely.
#[must_use]
pub fn summarize_table(table: &Table) -> TableSummary {
    let stats = table
        .headers()
        .iter()
        .enumerate()
        .filter(|(index, _)| table.column_kind(*index) == Some(ColumnKind::Numeric))
        .filter_map(|(index, name)| {
            ColumnStatistics::from_values(&table.numeric_values(index))
                .map(|stats| (name.clone(), stats))
        })
        .collect();

    TableSummary {
        rows: table.rows().to_vec(),
        stats,
    }
}

fn render_row(row: &[Cell]) -> String {
    let cells: Vec<String> = row
        .iter()
        .map(|cell| match cell {
            Cell::Empty => "nan".to_string(),
            Cell::Number(value) => format_number(*value),
            Cell::Text(text) => format!("'{text}'"),
        })
        .collect();
    format!("({})", cells.join(", "))
}
