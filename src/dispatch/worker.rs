//! Worker loop.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::error_handling::{update_error_stats, ProcessingStats};
use crate::fetch::Prober;
use crate::models::{ProbeResult, Target};
use crate::output::ResultSink;

use super::RunCounters;

/// Everything a worker needs, shared by all workers of a run.
pub(super) struct WorkerContext {
    pub prober: Arc<dyn Prober>,
    pub sink: Arc<dyn ResultSink>,
    pub stats: Arc<ProcessingStats>,
    pub counters: Arc<RunCounters>,
    pub timeout: Option<Duration>,
}

/// Drains `queue` until it is closed and empty.
///
/// Each target is probed once. Successes go to the sink; failures are counted
/// and dropped without retry.
pub(super) async fn run_worker(
    id: usize,
    queue: async_channel::Receiver<Target>,
    ctx: Arc<WorkerContext>,
) {
    // recv() fails only once the producer has closed the queue and it is empty
    while let Ok(target) = queue.recv().await {
        ctx.counters.attempted.fetch_add(1, Ordering::Relaxed);
        match ctx.prober.probe(&target, ctx.timeout).await {
            Ok(response) => {
                ctx.counters.succeeded.fetch_add(1, Ordering::Relaxed);
                ctx.sink.emit(ProbeResult::from_response(target, response));
            }
            Err(e) => {
                ctx.counters.dropped.fetch_add(1, Ordering::Relaxed);
                update_error_stats(&ctx.stats, &e);
                debug!("Dropping {} {}: {}", target.method, target.host, e);
            }
        }
    }
    debug!("Worker {} stopped", id);
}
