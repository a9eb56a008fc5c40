//! verb_tamper library: HTTP verb tampering probes
//!
//! This library sends every URL in a target list a request with each verb of a
//! fixed method vocabulary and reports the status code and body length that
//! came back. Work is spread over a bounded pool of async workers that share
//! one queue and a pool of reusable HTTP clients.
//!
//! # Example
//!
//! ```no_run
//! use verb_tamper::{run_scan, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     urls: vec!["https://example.com".to_string()],
//!     worker_count: 20,
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! println!("Sent {} probes, {} answered",
//!          report.summary.attempted, report.summary.succeeded);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod dispatch;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod output;
pub mod pool;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use dispatch::{Dispatcher, RunCounters, RunSummary};
pub use error_handling::{ConfigError, ProbeError};
pub use fetch::{Executor, Prober, RequestHeaders};
pub use models::{ProbeResponse, ProbeResult, Target, METHODS};
pub use output::{CollectingSink, ResultSink, WriterSink};
pub use pool::{ClientPool, PooledClient, TransportSettings};
pub use run::{run_scan, run_scan_with_sink, ScanReport};

// Internal run module (wires configuration into a dispatch run)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::app::{
        collect_targets, log_progress, print_final_statistics, read_targets,
        shutdown_gracefully, spawn_progress_logger,
    };
    use crate::config::Config;
    use crate::dispatch::{Dispatcher, RunSummary};
    use crate::fetch::{Executor, RequestHeaders};
    use crate::models::METHODS;
    use crate::output::{stdout_sink, ResultSink};
    use crate::pool::{ClientPool, TransportSettings};

    /// Results of a probing run.
    #[derive(Debug, Clone)]
    pub struct ScanReport {
        /// Targets that passed validation, in input order
        pub targets: Vec<String>,
        /// Counters of the dispatch run
        pub summary: RunSummary,
    }

    /// Runs a scan with the provided configuration, writing results to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid target remains, a header line is
    /// malformed, or stdin cannot be read. Failed probes are not errors; they
    /// are dropped and counted.
    pub async fn run_scan(config: Config) -> Result<ScanReport> {
        let sink = Arc::new(stdout_sink(config.output_format));
        run_scan_with_sink(config, sink).await
    }

    /// Runs a scan with the provided configuration, emitting results to `sink`.
    ///
    /// # Errors
    ///
    /// Same as [`run_scan`].
    pub async fn run_scan_with_sink(
        config: Config,
        sink: Arc<dyn ResultSink>,
    ) -> Result<ScanReport> {
        let mut raw_targets = config.urls.clone();
        if config.use_stdin {
            info!("Reading URLs from stdin");
            let stdin_targets =
                tokio::task::spawn_blocking(|| read_targets(std::io::stdin().lock()))
                    .await
                    .context("Stdin reader task failed")??;
            raw_targets.extend(stdin_targets);
        }
        let targets = collect_targets(&raw_targets)?;
        info!("Total valid targets: {}", targets.len());

        let headers = RequestHeaders::new(&config.headers)?;
        let pool = Arc::new(ClientPool::new(TransportSettings {
            verify_tls: config.verify_tls,
            ..Default::default()
        }));
        let executor = Arc::new(Executor::new(pool, headers));
        let dispatcher = Dispatcher::new(executor, sink);

        let total = targets.len() * METHODS.len();
        let cancel = CancellationToken::new();
        let logging_task = Some(spawn_progress_logger(
            Arc::clone(dispatcher.counters()),
            total,
            cancel.child_token(),
        ));

        let start_time = std::time::Instant::now();
        let summary = dispatcher
            .run(&targets, METHODS, config.worker_count, config.timeout())
            .await;

        shutdown_gracefully(cancel, logging_task).await;

        log_progress(start_time, dispatcher.counters(), total);
        print_final_statistics(&summary, dispatcher.stats());

        Ok(ScanReport { targets, summary })
    }
}
