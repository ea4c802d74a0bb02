use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use employee_report::ingestion::{IngestionOptions, TracingObserver};
use employee_report::pipeline::{EmployeeReportPipeline, DEFAULT_SOURCE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Print name, age and salary reports for a CSV file of employee records.
#[derive(Debug, Parser)]
#[command(name = "employee-report", version, about)]
struct Cli {
    /// CSV source: a header line, then `name,age,department,salary` per line.
    #[arg(default_value = DEFAULT_SOURCE)]
    path: PathBuf,
}

// Logs go to stderr so stdout carries only the report.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("employee_report=error"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger();

    let pipeline = EmployeeReportPipeline::default().with_ingestion(IngestionOptions {
        observer: Some(Arc::new(TracingObserver)),
        ..Default::default()
    });

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match pipeline.run(&cli.path, &mut out) {
        Ok(report) => {
            tracing::debug!(records = report.name_departments.len(), "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
