//! Run events and counters for [`super::ExecutionEngine`].
//!
//! Every engine call is one run over a single [`ExecutionStage`]. Runs report to an optional
//! [`ExecutionObserver`] as they progress, and leave their totals in [`ExecutionMetrics`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Which view a run is computing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStage {
    Projection,
    Filter,
    Sort,
}

/// Progress of a run.
///
/// Chunk events arrive from worker threads in completion order, not chunk order.
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    RunStarted { stage: ExecutionStage, records: usize },
    ChunkFinished {
        index: usize,
        records_in: usize,
        records_out: usize,
    },
    RunFinished {
        stage: ExecutionStage,
        metrics: ExecutionMetricsSnapshot,
    },
}

pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// Logs finished runs at debug level and chunk progress at trace level.
#[derive(Debug, Default)]
pub struct TracingExecutionObserver;

impl ExecutionObserver for TracingExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        match event {
            ExecutionEvent::RunFinished { stage, metrics } => {
                tracing::debug!(target: "employee_report::execution", ?stage, %metrics, "run finished");
            }
            other => tracing::trace!(target: "employee_report::execution", event = ?other),
        }
    }
}

/// Totals for the engine's latest run, updated by chunk workers while it is in progress.
///
/// A new run clears the previous totals; `runs` keeps counting.
#[derive(Debug, Default)]
pub struct ExecutionMetrics {
    runs: AtomicU64,
    records_in: AtomicU64,
    records_out: AtomicU64,
    chunks: AtomicU64,
    elapsed_us: AtomicU64,
}

impl ExecutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn start_run(&self) {
        self.runs.fetch_add(1, Ordering::Relaxed);
        for counter in [&self.records_in, &self.records_out, &self.chunks, &self.elapsed_us] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_chunk(&self, records_in: usize, records_out: usize) {
        self.records_in.fetch_add(records_in as u64, Ordering::Relaxed);
        self.records_out.fetch_add(records_out as u64, Ordering::Relaxed);
        self.chunks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn complete_run(&self, elapsed: Duration) {
        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.elapsed_us.store(micros, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ExecutionMetricsSnapshot {
        ExecutionMetricsSnapshot {
            runs: self.runs.load(Ordering::Relaxed),
            records_in: self.records_in.load(Ordering::Relaxed),
            records_out: self.records_out.load(Ordering::Relaxed),
            chunks: self.chunks.load(Ordering::Relaxed),
            elapsed: Duration::from_micros(self.elapsed_us.load(Ordering::Relaxed)),
        }
    }
}

/// Point-in-time copy of [`ExecutionMetrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionMetricsSnapshot {
    /// Runs started on this engine so far.
    pub runs: u64,
    pub records_in: u64,
    /// Records kept by the run: equal to `records_in` except for filters.
    pub records_out: u64,
    /// Chunks finished; a sort runs as a single chunk.
    pub chunks: u64,
    /// Zero until the run completes.
    pub elapsed: Duration,
}

impl fmt::Display for ExecutionMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run {}: {} -> {} records in {} chunks, {:?}",
            self.runs, self.records_in, self.records_out, self.chunks, self.elapsed
        )
    }
}
