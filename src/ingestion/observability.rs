//! Ingestion outcome reporting.
//!
//! [`super::ingest_from_path`] tells an [`IngestionObserver`] how each attempt ended. Failures
//! carry an [`IngestionSeverity`] so callers can decide which ones deserve an alert.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::IngestionError;

/// How serious an ingestion failure is. Ordered, so it can be compared with an alert threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// A line of the source was malformed.
    Error,
    /// The source itself could not be read.
    Critical,
}

impl IngestionSeverity {
    pub fn for_error(error: &IngestionError) -> Self {
        match error {
            IngestionError::SourceUnavailable { .. } => Self::Critical,
            IngestionError::MalformedRecord { .. } => Self::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// Source the roster was read from.
    pub path: PathBuf,
}

/// Summary of a successfully ingested roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Employee records in the roster.
    pub records: usize,
    /// Wall time spent opening and parsing the source.
    pub elapsed: Duration,
}

/// Receives the outcome of every ingestion attempt. All callbacks default to doing nothing.
pub trait IngestionObserver: Send + Sync {
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &IngestionError) {}

    /// Called after [`Self::on_failure`] when the severity reaches the configured alert threshold.
    fn on_alert(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &IngestionError) {}
}

/// Emits ingestion events as `tracing` events under the `employee_report::ingest` target.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl IngestionObserver for TracingObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        tracing::info!(
            target: "employee_report::ingest",
            path = %ctx.path.display(),
            records = stats.records,
            elapsed = ?stats.elapsed,
            "ingested employee records"
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        tracing::warn!(
            target: "employee_report::ingest",
            path = %ctx.path.display(),
            ?severity,
            %error,
            "ingestion failed"
        );
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        tracing::error!(
            target: "employee_report::ingest",
            alert = true,
            path = %ctx.path.display(),
            ?severity,
            %error,
            "ingestion alert"
        );
    }
}
