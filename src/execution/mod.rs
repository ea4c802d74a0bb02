//! Parallel execution engine for the per-record views.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - Chunked parallel projection and filtering on a dedicated rayon pool
//! - A parallel stable salary sort
//! - Per-run counters and progress events for monitoring
//!
//! Results are always concatenated in chunk order, so output order matches sequential
//! evaluation exactly.

mod observer;

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{ReportError, ReportResult};
use crate::types::{Employee, Roster};

pub use observer::{
    ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionObserver, ExecutionStage,
    TracingExecutionObserver,
};

/// Configuration for the [`ExecutionEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Number of worker threads used by the engine.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
    /// Number of records per chunk.
    pub chunk_size: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            num_threads: None,
            chunk_size: 4_096,
        }
    }
}

/// A configurable execution engine for in-memory [`Roster`] views.
pub struct ExecutionEngine {
    pool: ThreadPool,
    opts: ExecutionOptions,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
}

impl std::fmt::Debug for ExecutionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionEngine")
            .field("threads", &self.pool.current_num_threads())
            .field("opts", &self.opts)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl ExecutionEngine {
    /// Create a new engine with the given options.
    ///
    /// Fails with [`ReportError::InvalidOptions`] if `chunk_size == 0`, `num_threads == Some(0)`,
    /// or the thread pool cannot be built.
    pub fn new(opts: ExecutionOptions) -> ReportResult<Self> {
        if opts.chunk_size == 0 {
            return Err(invalid("chunk_size must be > 0"));
        }
        if opts.num_threads == Some(0) {
            return Err(invalid("num_threads must be > 0 when set"));
        }

        let n_threads = opts
            .num_threads
            .unwrap_or_else(|| std::thread::available_parallelism().map_or(1, |n| n.get()));

        let pool = ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .thread_name(|i| format!("employee-report-{i}"))
            .build()
            .map_err(|e| invalid(format!("failed to build thread pool: {e}")))?;

        Ok(Self {
            pool,
            opts,
            observer: None,
            metrics: Arc::new(ExecutionMetrics::new()),
        })
    }

    /// Report run progress to `observer`.
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Shared handle to the counters of the latest run.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Apply `mapper` to every record in parallel, returning results in roster order.
    pub fn project_parallel<T, F>(&self, roster: &Roster, mapper: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&Employee) -> T + Send + Sync,
    {
        self.run_chunked(ExecutionStage::Projection, roster, |e, out| out.push(mapper(e)))
    }

    /// Keep the records matching `predicate`, evaluated in parallel, in roster order.
    pub fn filter_parallel<'a, F>(&self, roster: &'a Roster, predicate: F) -> Vec<&'a Employee>
    where
        F: Fn(&Employee) -> bool + Send + Sync,
    {
        self.run_chunked(ExecutionStage::Filter, roster, |e, out| {
            if predicate(e) {
                out.push(e);
            }
        })
    }

    /// Stable ascending salary sort on the engine's pool.
    pub fn sort_by_salary_parallel<'a>(&self, roster: &'a Roster) -> Vec<&'a Employee> {
        let start = self.start(ExecutionStage::Sort, roster);

        let mut sorted: Vec<&Employee> = roster.iter().collect();
        self.pool.install(|| sorted.par_sort_by_key(|e| e.salary));
        self.metrics.record_chunk(sorted.len(), sorted.len());

        self.finish(ExecutionStage::Sort, start);
        sorted
    }

    fn run_chunked<'a, T, F>(&self, stage: ExecutionStage, roster: &'a Roster, work: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&'a Employee, &mut Vec<T>) + Send + Sync,
    {
        let start = self.start(stage, roster);

        let records: &'a [Employee] = roster.records();
        let per_chunk: Vec<Vec<T>> = self.pool.install(|| {
            records
                .par_chunks(self.opts.chunk_size)
                .enumerate()
                .map(|(index, chunk)| {
                    let mut out = Vec::with_capacity(chunk.len());
                    for employee in chunk {
                        work(employee, &mut out);
                    }
                    self.metrics.record_chunk(chunk.len(), out.len());
                    self.emit(ExecutionEvent::ChunkFinished {
                        index,
                        records_in: chunk.len(),
                        records_out: out.len(),
                    });
                    out
                })
                .collect()
        });

        let out = per_chunk.into_iter().flatten().collect();
        self.finish(stage, start);
        out
    }

    fn start(&self, stage: ExecutionStage, roster: &Roster) -> Instant {
        self.metrics.start_run();
        self.emit(ExecutionEvent::RunStarted {
            stage,
            records: roster.len(),
        });
        Instant::now()
    }

    fn finish(&self, stage: ExecutionStage, start: Instant) {
        self.metrics.complete_run(start.elapsed());
        self.emit(ExecutionEvent::RunFinished {
            stage,
            metrics: self.metrics.snapshot(),
        });
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

fn invalid(message: impl Into<String>) -> ReportError {
    ReportError::InvalidOptions {
        message: message.into(),
    }
}
