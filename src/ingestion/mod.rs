//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_from_path`] (from [`unified`]) which:
//!
//! - reads a CSV source into an in-memory [`crate::types::Roster`]
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! The CSV-specific functions live under [`csv`].

pub mod csv;
pub mod observability;
pub mod unified;

pub use observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, TracingObserver};
pub use unified::{ingest_from_path, IngestionOptions, IngestionRequest};
