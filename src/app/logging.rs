//! Progress logging utilities.

use std::sync::Arc;
use std::time::Instant;

use log::info;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::LOGGING_INTERVAL;
use crate::dispatch::RunCounters;

/// Logs how many probes have completed and the current rate.
pub fn log_progress(start_time: Instant, counters: &RunCounters, total: usize) {
    let (attempted, succeeded, dropped) = counters.snapshot();
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        attempted as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Probed {}/{} ({} answered, {} dropped) in {:.2} seconds (~{:.2} probes/sec)",
        attempted, total, succeeded, dropped, elapsed_secs, rate
    );
}

/// Spawns a task that logs progress every `LOGGING_INTERVAL` until `cancel`
/// fires.
pub fn spawn_progress_logger(
    counters: Arc<RunCounters>,
    total: usize,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    let start_time = Instant::now();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LOGGING_INTERVAL);
        // First tick fires immediately
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    log_progress(start_time, &counters, total);
                }
                _ = cancel.cancelled() => {
                    break;
                }
            }
        }
    })
}
