//! The fixed dataset catalogue.
//!
//! Every run processes the same four datasets in the same order. Each one
//! carries the URL it is fetched from, the local file it is saved to and the
//! report file its summary is written to.

use std::fmt;

use crate::fetch::PayloadFormat;

/// Base URL shared by the four remote datasets.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/denisecase/datafun-03-spec/main";

/// Output directory (relative to the working directory) used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// The format family of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// Plain text, summarized as word frequencies.
    Text,
    /// Comma-separated table.
    Csv,
    /// Spreadsheet workbook (first worksheet is summarized).
    Spreadsheet,
    /// JSON document with an object at the top level.
    Json,
}

impl DatasetKind {
    /// All kinds in processing order.
    pub const ALL: [Self; 4] = [Self::Text, Self::Csv, Self::Spreadsheet, Self::Json];

    /// Human label used in console lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Csv => "CSV",
            Self::Spreadsheet => "Excel",
            Self::Json => "JSON",
        }
    }

    /// Name of the raw file saved in the output directory.
    ///
    /// The remote resource carries the same name.
    #[must_use]
    pub fn local_filename(self) -> &'static str {
        match self {
            Self::Text => "data.txt",
            Self::Csv => "data.csv",
            Self::Spreadsheet => "data.xls",
            Self::Json => "data.json",
        }
    }

    /// Name of the processed report saved in the output directory.
    #[must_use]
    pub fn report_filename(self) -> &'static str {
        match self {
            Self::Text => "processed_text.txt",
            Self::Csv => "processed_csv.txt",
            Self::Spreadsheet => "processed_excel.txt",
            Self::Json => "processed_json.txt",
        }
    }

    /// Payload shape the fetcher must produce for this kind.
    #[must_use]
    pub fn payload_format(self) -> PayloadFormat {
        match self {
            Self::Text | Self::Csv => PayloadFormat::Text,
            Self::Spreadsheet => PayloadFormat::Bytes,
            Self::Json => PayloadFormat::Json,
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One remote dataset processed by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub kind: DatasetKind,
    pub url: String,
    pub filename: String,
    pub report_filename: String,
}

impl Dataset {
    /// Creates a dataset of `kind` fetched from `url` with the default file names.
    #[must_use]
    pub fn new(kind: DatasetKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            filename: kind.local_filename().to_string(),
            report_filename: kind.report_filename().to_string(),
        }
    }

    /// Builds the fixed catalogue rooted at `base_url`, in processing order.
    ///
    /// A trailing slash on `base_url` is ignored.
    #[must_use]
    pub fn catalogue(base_url: &str) -> Vec<Self> {
        let base = base_url.trim_end_matches('/');
        DatasetKind::ALL
            .into_iter()
            .map(|kind| Self::new(kind, format!("{base}/{}", kind.local_filename())))
            .collect()
    }
}
