//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, configuration, per-probe)
//! - Categorization of probe failures
//! - Thread-safe counters for dropped probes
//!
//! Per-probe errors never propagate out of a worker. They are categorized,
//! counted and reported in the end-of-run summary on stderr.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_probe_error, categorize_reqwest_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{ConfigError, ErrorType, InitializationError, ProbeError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        assert_eq!(stats.total_errors(), 0);
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_error(ErrorType::HttpRequestConnectError);
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestTimeoutError), 2);
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestConnectError), 1);
        assert_eq!(stats.total_errors(), 3);
    }

    #[test]
    fn test_processing_stats_concurrent_increments() {
        let stats = std::sync::Arc::new(ProcessingStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = std::sync::Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        stats.increment_error(ErrorType::HttpRequestOtherError);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread panicked");
        }
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestOtherError), 800);
    }
}
