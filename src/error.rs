//! Error types for the analysis pipeline

use thiserror::Error;

/// Failures surfaced by the analysis pipeline
///
/// Cancellation is a distinct variant so callers can tell an aborted run
/// apart from an upstream failure. The algorithms themselves cannot fail on
/// a well-formed graph; everything here originates at the caller or the
/// edge source.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The caller's cancellation signal fired before the run completed
    #[error("analysis canceled")]
    Canceled,

    /// The edge source has no dataset under this identifier
    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    /// I/O failure while reading from the edge source
    #[error("edge source failure: {0}")]
    Io(#[from] std::io::Error),
}
