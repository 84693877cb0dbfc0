//! Per-format summarizers.
//!
//! Each summarizer is a pure function over in-memory content returning a
//! report value with a `render()` method. [`summarize_file`] reads a
//! persisted dataset back in, dispatches on its [`DatasetKind`] and writes
//! the rendered report.

mod error;
mod json;
mod tabular;
mod text;

use std::path::Path;

use tracing::{debug, info};

pub use error::SummarizeError;
pub use json::{JsonSummary, summarize_json};
pub use tabular::{TableSummary, summarize_table};
pub use text::{WordFrequencyReport, summarize_text};

use crate::dataset::DatasetKind;
use crate::table::Table;

/// Summarizes the persisted dataset at `input` and writes the report to `output`.
///
/// # Errors
///
/// Returns [`SummarizeError`] if the input cannot be read or parsed, if a
/// JSON document is not an object, or if the report cannot be written.
pub async fn summarize_file(
    kind: DatasetKind,
    input: &Path,
    output: &Path,
) -> Result<(), SummarizeError> {
    debug!(input = %input.display(), ?kind, "summarizing");

    let report = match kind {
        DatasetKind::Text => {
            let text = tokio::fs::read_to_string(input)
                .await
                .map_err(|e| SummarizeError::io(input, e))?;
            summarize_text(&text).render()
        }
        DatasetKind::Csv => {
            let text = tokio::fs::read_to_string(input)
                .await
                .map_err(|e| SummarizeError::io(input, e))?;
            let table = Table::from_csv_str(&text).map_err(|e| SummarizeError::table(input, e))?;
            summarize_table(&table).render()
        }
        DatasetKind::Spreadsheet => {
            let bytes = tokio::fs::read(input)
                .await
                .map_err(|e| SummarizeError::io(input, e))?;
            let table =
                Table::from_spreadsheet_bytes(&bytes).map_err(|e| SummarizeError::table(input, e))?;
            summarize_table(&table).render()
        }
        DatasetKind::Json => {
            let bytes = tokio::fs::read(input)
                .await
                .map_err(|e| SummarizeError::io(input, e))?;
            let value: serde_json::Value =
                serde_json::from_slice(&bytes).map_err(|e| SummarizeError::json(input, e))?;
            summarize_json(&value)?.render()
        }
    };

    tokio::fs::write(output, report)
        .await
        .map_err(|e| SummarizeError::io(output, e))?;

    info!(
        "{} data processed and saved to {}",
        kind.label(),
        output.display()
    );
    Ok(())
}
