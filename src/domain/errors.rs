// src/domain/errors.rs
use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

/// Failure taxonomy for one report run. Every variant is fatal for the
/// run that produced it; there is no retry and no partial rendering.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("article store unreachable: {0}")]
    Connection(String),
    #[error("article query failed: {0}")]
    Query(String),
    #[error("article table returned no rows")]
    EmptyDataset,
    #[error("unparseable publish date: {0:?}")]
    DateParse(String),
}
