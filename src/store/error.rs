//! Error types for the store module.

use std::path::PathBuf;

use thiserror::Error;

use crate::dataset::DatasetKind;
use crate::fetch::PayloadFormat;
use crate::table::TableError;

/// Errors that can occur while persisting a fetched dataset.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File system error (create directory, write file, etc.)
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// CSV content could not be normalized through a table parse.
    #[error("could not normalize CSV for {path}: {source}")]
    Csv {
        /// The destination path.
        path: PathBuf,
        /// The underlying table error.
        #[source]
        source: TableError,
    },

    /// JSON content could not be serialized.
    #[error("could not serialize JSON for {path}: {source}")]
    Json {
        /// The destination path.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The payload shape does not match the dataset kind.
    #[error("{kind} dataset cannot be saved from a {format:?} payload")]
    PayloadMismatch {
        /// Dataset kind being saved.
        kind: DatasetKind,
        /// Format of the payload that was supplied.
        format: PayloadFormat,
    },
}

impl StoreError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a CSV normalization error.
    pub fn csv(path: impl Into<PathBuf>, source: TableError) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Creates a JSON serialization error.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
