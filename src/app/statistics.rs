//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::dispatch::RunSummary;
use crate::error_handling::{ErrorType, ProcessingStats};

/// Logs the per-category counts of dropped probes.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Dropped probes by cause ({} total):", total_errors);
    for error_type in ErrorType::iter() {
        let count = error_stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}

/// One-line summary of a run.
pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "Sent {} probe{} ({} answered, {} dropped) in {:.1}s",
        summary.attempted,
        if summary.attempted == 1 { "" } else { "s" },
        summary.succeeded,
        summary.dropped,
        summary.elapsed.as_secs_f64()
    )
}

/// Logs the run summary followed by the error breakdown.
pub fn print_final_statistics(summary: &RunSummary, error_stats: &ProcessingStats) {
    info!("{}", summary_line(summary));
    if summary.panicked_workers > 0 {
        log::warn!("{} worker(s) panicked", summary.panicked_workers);
    }
    print_error_statistics(error_stats);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn summary(attempted: usize) -> RunSummary {
        RunSummary {
            queued: attempted,
            attempted,
            succeeded: attempted.saturating_sub(1),
            dropped: attempted.min(1),
            panicked_workers: 0,
            elapsed: Duration::from_millis(1500),
        }
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line(&summary(62)),
            "Sent 62 probes (61 answered, 1 dropped) in 1.5s"
        );
        assert_eq!(
            summary_line(&summary(1)),
            "Sent 1 probe (0 answered, 1 dropped) in 1.5s"
        );
    }

    #[test]
    fn test_print_error_statistics_no_errors() {
        let stats = ProcessingStats::new();
        print_error_statistics(&stats);
    }

    #[test]
    fn test_print_final_statistics_with_errors() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_error(ErrorType::HttpRequestConnectError);
        print_final_statistics(&summary(10), &stats);
    }
}
