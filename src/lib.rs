//! Datafetch Core Library
//!
//! This library fetches a fixed catalogue of reference datasets (plain text,
//! CSV, spreadsheet, JSON), persists each one to a local output directory and
//! writes a small summary report per format.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`dataset`] - The fixed dataset catalogue and per-format file names
//! - [`fetch`] - HTTP fetcher returning payloads typed by expected format
//! - [`store`] - Writer persisting payloads to the output directory
//! - [`table`] - Tabular model shared by CSV and spreadsheet content
//! - [`stats`] - Numeric column statistics
//! - [`summarize`] - Per-format summarizers and report rendering
//! - [`pipeline`] - Sequential fetch → save → summarize orchestration

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dataset;
pub mod fetch;
pub mod pipeline;
pub mod stats;
pub mod store;
pub mod summarize;
pub mod table;

mod user_agent;

// Re-export commonly used types
pub use dataset::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR, Dataset, DatasetKind};
pub use fetch::{FetchError, HttpClient, Payload, PayloadFormat};
pub use pipeline::{DatasetOutcome, Pipeline, PipelineError, RunStats, Stage};
pub use stats::ColumnStatistics;
pub use store::{StoreError, prepare_output_dir, save};
pub use summarize::{
    JsonSummary, SummarizeError, TableSummary, WordFrequencyReport, summarize_file,
    summarize_json, summarize_table, summarize_text,
};
pub use table::{Cell, ColumnKind, Table, TableError};
