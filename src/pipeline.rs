//! End-to-end pipeline: ingest a source, build every view, write the report.

use std::io::Write;
use std::path::Path;

use crate::error::ReportResult;
use crate::ingestion::{ingest_from_path, IngestionOptions};
use crate::report::{EmployeeReport, ReportOptions};

/// Source read when no path is given.
pub const DEFAULT_SOURCE: &str = "employees.csv";

/// Reads employee records and writes the derived report.
///
/// Ingestion completes before anything is written, so a failing source produces no report
/// output at all.
///
/// ```no_run
/// use employee_report::pipeline::{EmployeeReportPipeline, DEFAULT_SOURCE};
///
/// # fn main() -> Result<(), employee_report::ReportError> {
/// let stdout = std::io::stdout();
/// EmployeeReportPipeline::default().run(DEFAULT_SOURCE, &mut stdout.lock())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeReportPipeline {
    options: ReportOptions,
    ingestion: IngestionOptions,
}

impl EmployeeReportPipeline {
    pub fn new(options: ReportOptions) -> Self {
        Self {
            options,
            ingestion: IngestionOptions::default(),
        }
    }

    /// Use `ingestion` (observer, alert threshold) when reading the source.
    pub fn with_ingestion(mut self, ingestion: IngestionOptions) -> Self {
        self.ingestion = ingestion;
        self
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Ingest `path`, render the report into `out`, and return the computed views.
    pub fn run<W: Write>(&self, path: impl AsRef<Path>, out: &mut W) -> ReportResult<EmployeeReport> {
        let path = path.as_ref();
        let span = tracing::debug_span!("report", path = %path.display());
        let _guard = span.enter();

        let roster = ingest_from_path(path, &self.ingestion)?;
        tracing::debug!(records = roster.len(), "building report");

        let report = EmployeeReport::build(&roster, &self.options)?;
        report.render(out)?;
        out.flush()?;
        tracing::debug!("report written");
        Ok(report)
    }
}
