//! Sequential fetch → save → summarize orchestration.
//!
//! Datasets are processed one after another, in the order given. A failure
//! in any stage ends that dataset's pipeline only: it is logged, counted in
//! [`RunStats`], and the next dataset runs as if nothing happened.

mod error;

use std::path::{Path, PathBuf};

use tracing::{error, info, instrument, warn};

pub use error::{PipelineError, Stage};

use crate::dataset::{Dataset, DatasetKind};
use crate::fetch::HttpClient;
use crate::store;
use crate::summarize::summarize_file;

/// Files produced for a successfully processed dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetOutcome {
    pub kind: DatasetKind,
    /// The persisted raw dataset.
    pub data_path: PathBuf,
    /// The written report.
    pub report_path: PathBuf,
}

/// Per-run counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    processed: Vec<DatasetKind>,
    failures: Vec<(DatasetKind, Stage)>,
}

impl RunStats {
    /// Number of datasets that produced a report.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.processed.len()
    }

    /// Number of datasets that failed in some stage.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Number of datasets attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.processed() + self.failed()
    }

    /// Failed datasets with the stage each one failed in, in run order.
    #[must_use]
    pub fn failures(&self) -> &[(DatasetKind, Stage)] {
        &self.failures
    }
}

/// Runs datasets through fetch, save and summarize.
#[derive(Debug, Clone)]
pub struct Pipeline {
    client: HttpClient,
    output_dir: PathBuf,
}

impl Pipeline {
    /// Creates a pipeline writing into `output_dir`.
    ///
    /// The directory must exist; see [`store::prepare_output_dir`].
    #[must_use]
    pub fn new(client: HttpClient, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
        }
    }

    /// Directory raw files and reports are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fetches, saves and summarizes one dataset.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure as a [`PipelineError`].
    #[instrument(skip(self, dataset), fields(kind = %dataset.kind, url = %dataset.url))]
    pub async fn process(&self, dataset: &Dataset) -> Result<DatasetOutcome, PipelineError> {
        let payload = self
            .client
            .fetch(&dataset.url, dataset.kind.payload_format())
            .await?;

        let data_path = store::save(&self.output_dir, dataset.kind, &dataset.filename, &payload).await?;

        let report_path = self.output_dir.join(&dataset.report_filename);
        summarize_file(dataset.kind, &data_path, &report_path).await?;

        Ok(DatasetOutcome {
            kind: dataset.kind,
            data_path,
            report_path,
        })
    }

    /// Processes every dataset in order. Never stops early.
    pub async fn run(&self, datasets: &[Dataset]) -> RunStats {
        let mut stats = RunStats::default();

        for dataset in datasets {
            match self.process(dataset).await {
                Ok(outcome) => stats.processed.push(outcome.kind),
                Err(err) => {
                    log_failure(dataset.kind, &err);
                    stats.failures.push((dataset.kind, err.stage()));
                }
            }
        }

        info!(
            processed = stats.processed(),
            failed = stats.failed(),
            total = stats.total(),
            "Run complete"
        );
        stats
    }
}

fn log_failure(kind: DatasetKind, err: &PipelineError) {
    let label = kind.label();
    match err {
        PipelineError::Fetch(source) => match source.status() {
            Some(status) => warn!(stage = %err.stage(), "Failed to fetch {label} data: {status}"),
            None => warn!(stage = %err.stage(), "Failed to fetch {label} data: {source}"),
        },
        PipelineError::Store(source) => {
            error!(stage = %err.stage(), "Error saving {label} data: {source}");
        }
        PipelineError::Summarize(source) => {
            error!(stage = %err.stage(), "Error processing {label} data: {source}");
        }
    }
}
