//! `employee-report` ingests employee records from a CSV source into an in-memory
//! [`types::Roster`] and derives a small text report from it.
//!
//! The primary entrypoint is [`pipeline::EmployeeReportPipeline`], which reads the source with
//! [`ingestion::ingest_from_path`] and writes every view of [`report::EmployeeReport`].
//!
//! ## Input
//!
//! A header line (ignored) followed by one `name,age,department,salary` record per line. Fields
//! are trimmed and never quoted. The first malformed line, blank lines included, aborts
//! ingestion with [`IngestionError::MalformedRecord`]; an unreadable source yields
//! [`IngestionError::SourceUnavailable`].
//!
//! ## Report
//!
//! ```rust
//! use employee_report::report::{EmployeeReport, ReportOptions};
//! use employee_report::types::{Employee, Roster};
//!
//! let roster = Roster::new(vec![
//!     Employee::new("Alice", 35, "Eng", "50000".parse().unwrap()),
//!     Employee::new("Bob", 25, "Sales", "40000".parse().unwrap()),
//! ]);
//! let report = EmployeeReport::build(&roster, &ReportOptions::default()).unwrap();
//! assert_eq!(report.lines()[2], "Average salary: 45000€");
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV ingestion and observer hooks
//! - [`types`]: records, roster and the exact decimal salary type
//! - [`processing`]: projection, filter, reductions and salary sort
//! - [`execution`]: order-preserving parallel evaluation on a rayon pool
//! - [`report`]: the assembled views and their rendering
//! - [`pipeline`]: ingestion → report → writer
//! - [`error`]: error types

pub mod error;
pub mod execution;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{IngestionError, IngestionResult, ReportError, ReportResult};
pub use pipeline::EmployeeReportPipeline;
