//! Concurrent dispatch of probes.
//!
//! The dispatcher expands targets × methods into individual probes, feeds them
//! through one shared queue, and runs a fixed number of workers that drain it.
//! Closing the queue is the stop signal: once the producer has sent the last
//! item it closes the channel, each worker exits when `recv` reports the queue
//! closed and empty, and the dispatcher waits on every worker's join handle
//! before returning.
//!
//! Every item is received by exactly one worker. No ordering is kept between
//! results.

mod worker;


use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, info, warn};

use crate::config::WORK_QUEUE_CAPACITY;
use crate::error_handling::ProcessingStats;
use crate::fetch::Prober;
use crate::models::cross_product;
use crate::output::ResultSink;

use worker::{run_worker, WorkerContext};

/// Live counters for a run, readable while workers are busy.
#[derive(Debug, Default)]
pub struct RunCounters {
    /// Probes taken off the queue
    pub attempted: AtomicUsize,
    /// Probes that produced a result record
    pub succeeded: AtomicUsize,
    /// Probes dropped because of an error
    pub dropped: AtomicUsize,
}

impl RunCounters {
    /// Snapshot of (attempted, succeeded, dropped).
    pub fn snapshot(&self) -> (usize, usize, usize) {
        (
            self.attempted.load(Ordering::SeqCst),
            self.succeeded.load(Ordering::SeqCst),
            self.dropped.load(Ordering::SeqCst),
        )
    }
}

/// Outcome of one dispatch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of probes queued (targets × methods, or 0 with no workers)
    pub queued: usize,
    /// Probes taken off the queue by a worker
    pub attempted: usize,
    /// Probes that produced a result record
    pub succeeded: usize,
    /// Probes dropped because of an error
    pub dropped: usize,
    /// Workers that ended by panicking instead of observing the stop signal
    pub panicked_workers: usize,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

/// Runs probes for targets × methods over a pool of workers.
pub struct Dispatcher {
    prober: Arc<dyn Prober>,
    sink: Arc<dyn ResultSink>,
    stats: Arc<ProcessingStats>,
    counters: Arc<RunCounters>,
}

impl Dispatcher {
    /// Creates a dispatcher that probes with `prober` and emits to `sink`.
    pub fn new(prober: Arc<dyn Prober>, sink: Arc<dyn ResultSink>) -> Self {
        Self {
            prober,
            sink,
            stats: Arc::new(ProcessingStats::new()),
            counters: Arc::new(RunCounters::default()),
        }
    }

    /// Per-category counts of dropped probes.
    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Live progress counters.
    pub fn counters(&self) -> &Arc<RunCounters> {
        &self.counters
    }

    /// Probes every URL with every method and waits for all workers to stop.
    ///
    /// Methods are queued in the given order for each URL in turn. A
    /// `worker_count` of zero or less sends nothing and returns at once.
    pub async fn run<S: AsRef<str>>(
        &self,
        urls: &[String],
        methods: &[S],
        worker_count: i32,
        timeout: Option<Duration>,
    ) -> RunSummary {
        let start = Instant::now();
        let baseline = self.counters.snapshot();
        let workers = match usize::try_from(worker_count) {
            Ok(n) if n > 0 => n,
            _ => {
                debug!("Worker count {} is not positive, nothing to do", worker_count);
                return self.summary(baseline, 0, 0, start);
            }
        };

        let targets = cross_product(urls, methods);
        let queued = targets.len();
        info!(
            "Dispatching {} probes ({} targets x {} methods) over {} workers",
            queued,
            urls.len(),
            methods.len(),
            workers
        );

        let (sender, receiver) = async_channel::bounded(WORK_QUEUE_CAPACITY);
        let ctx = Arc::new(WorkerContext {
            prober: Arc::clone(&self.prober),
            sink: Arc::clone(&self.sink),
            stats: Arc::clone(&self.stats),
            counters: Arc::clone(&self.counters),
            timeout,
        });

        let mut handles = FuturesUnordered::new();
        for id in 0..workers {
            handles.push(tokio::spawn(run_worker(
                id,
                receiver.clone(),
                Arc::clone(&ctx),
            )));
        }
        // Workers hold the only receivers; if they all die, send() fails
        drop(receiver);

        for target in targets {
            if sender.send(target).await.is_err() {
                warn!("All workers stopped before the queue was drained");
                break;
            }
        }
        sender.close();

        let mut panicked = 0usize;
        while let Some(result) = handles.next().await {
            if let Err(join_error) = result {
                panicked += 1;
                warn!("Worker panicked: {:?}", join_error);
            }
        }

        self.summary(baseline, queued, panicked, start)
    }

    // Counters are cumulative across runs; report only this run's share
    fn summary(
        &self,
        baseline: (usize, usize, usize),
        queued: usize,
        panicked_workers: usize,
        start: Instant,
    ) -> RunSummary {
        let (attempted, succeeded, dropped) = self.counters.snapshot();
        RunSummary {
            queued,
            attempted: attempted - baseline.0,
            succeeded: succeeded - baseline.1,
            dropped: dropped - baseline.2,
            panicked_workers,
            elapsed: start.elapsed(),
        }
    }
}
