//! Configuration constants.
//!
//! This module defines the defaults and fixed limits used throughout the
//! application: worker counts, timeouts, transport caps and output layout.

use std::time::Duration;

/// Default number of concurrent workers
pub const DEFAULT_WORKER_COUNT: i32 = 10;
/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Interval between progress log lines.
pub const LOGGING_INTERVAL: Duration = Duration::from_secs(5);

/// Default User-Agent sent with every probe.
///
/// Callers can replace it with `-H "User-Agent: ..."`; extra headers are
/// applied after this one.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:60.0) Gecko/20100101 Firefox/60.0";

// Client pool limits
/// Maximum idle clients kept by the pool for reuse
pub const MAX_IDLE_CLIENTS: usize = 100;
/// Maximum idle connections each client keeps per host
pub const MAX_IDLE_CONNS_PER_HOST: usize = 100;

/// Capacity of the shared work queue.
///
/// Kept at 1 so the producer stays at most one item ahead of the workers.
pub const WORK_QUEUE_CAPACITY: usize = 1;

/// Column width the method name is padded to in plain output.
pub const METHOD_COLUMN_WIDTH: usize = 17;
