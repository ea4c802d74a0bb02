use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Convenience result type for building and writing a report.
pub type ReportResult<T> = Result<T, ReportError>;

/// Error type returned by ingestion functions.
///
/// Both variants are fatal: ingestion stops at the first failure and no partial
/// [`crate::types::Roster`] is returned.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// The source could not be opened or read (missing file, permission denied, read failure).
    #[error("cannot read source '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line does not have the expected shape or a numeric field failed to parse.
    #[error("malformed record at line {line}: {message}")]
    MalformedRecord { line: u64, message: String },
}

/// Error type returned by [`crate::pipeline::EmployeeReportPipeline`].
#[derive(Debug, Error)]
pub enum ReportError {
    /// Ingestion failed before any report output was produced.
    #[error(transparent)]
    Ingestion(#[from] IngestionError),

    /// Writing the rendered report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Execution options were rejected (zero chunk size, zero threads, pool build failure).
    #[error("invalid options: {message}")]
    InvalidOptions { message: String },
}
