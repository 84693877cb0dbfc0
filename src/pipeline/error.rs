//! Error types for the pipeline module.

use std::fmt;

use thiserror::Error;

use crate::fetch::FetchError;
use crate::store::StoreError;
use crate::summarize::SummarizeError;

/// Pipeline stage a dataset failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Save,
    Summarize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fetch => "fetch",
            Self::Save => "save",
            Self::Summarize => "summarize",
        })
    }
}

/// A failure of one dataset's pipeline. Never aborts the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

impl PipelineError {
    /// The stage that failed.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::Fetch(_) => Stage::Fetch,
            Self::Store(_) => Stage::Save,
            Self::Summarize(_) => Stage::Summarize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_of_each_variant() {
        let fetch = PipelineError::from(FetchError::http_status("http://x/data.txt", 500));
        assert_eq!(fetch.stage(), Stage::Fetch);

        let store = PipelineError::from(StoreError::io(
            "/tmp/data.txt",
            std::io::Error::other("disk full"),
        ));
        assert_eq!(store.stage(), Stage::Save);

        let summarize = PipelineError::from(SummarizeError::NotAnObject { found: "an array" });
        assert_eq!(summarize.stage(), Stage::Summarize);
        assert_eq!(summarize.stage().to_string(), "summarize");
    }

    #[test]
    fn test_display_is_transparent() {
        let err = PipelineError::from(FetchError::http_status("http://x/data.csv", 404));
        assert_eq!(err.to_string(), "HTTP 404 fetching http://x/data.csv");
    }
}
