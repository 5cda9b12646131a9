// errors.rs
use crate::analyst::SummarizationError;
use crate::persist::PersistError;
use crate::report::ReportError;
use crate::scraper::{FetchError, ParseError};
use std::time::Duration;
use thiserror::Error;

/// Why a run stopped. Every stage fails fast into one of these.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Fetch failed: {0}")]
    Fetch(FetchError),

    #[error("Rendering fetch timed out after {0:?}")]
    Timeout(Duration),

    #[error("Parse failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Summarization failed: {0}")]
    Summarization(#[from] SummarizationError),

    #[error("Write failed: {0}")]
    Io(#[from] PersistError),

    #[error("Report not generated: {0}")]
    Report(ReportError),
}

impl From<FetchError> for PipelineError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Timeout(after) => PipelineError::Timeout(after),
            other => PipelineError::Fetch(other),
        }
    }
}

impl From<ReportError> for PipelineError {
    fn from(e: ReportError) -> Self {
        match e {
            ReportError::Io(io) => PipelineError::Io(PersistError::Io(io)),
            ReportError::Json(json) => PipelineError::Io(PersistError::Json(json)),
            missing @ ReportError::MissingSection(_) => PipelineError::Report(missing),
        }
    }
}
