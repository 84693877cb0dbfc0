//! Error types for the summarize module.

use std::path::PathBuf;

use thiserror::Error;

use crate::table::TableError;

/// Errors that can occur while summarizing a persisted dataset.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Reading the dataset or writing the report failed.
    #[error("IO error on {path}: {source}")]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The persisted table could not be parsed.
    #[error("could not read table from {path}: {source}")]
    Table {
        /// The table file.
        path: PathBuf,
        /// The underlying table error.
        #[source]
        source: TableError,
    },

    /// The persisted JSON could not be parsed.
    #[error("could not parse JSON from {path}: {source}")]
    Json {
        /// The JSON file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The JSON document is not an object at the top level.
    #[error("expected a JSON object at the top level, found {found}")]
    NotAnObject {
        /// JSON type that was found instead.
        found: &'static str,
    },
}

impl SummarizeError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a table parse error.
    pub fn table(path: impl Into<PathBuf>, source: TableError) -> Self {
        Self::Table {
            path: path.into(),
            source,
        }
    }

    /// Creates a JSON parse error.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
