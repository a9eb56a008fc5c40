//! Main application modules.
//!
//! This module provides target validation, the banner, progress logging,
//! shutdown handling and statistics printing used around a dispatch run.

pub mod banner;
pub mod logging;
pub mod shutdown;
pub mod statistics;
pub mod url;

// Re-export public API
pub use banner::{banner_text, print_banner, PLAIN_COLUMN_HEADER};
pub use logging::{log_progress, spawn_progress_logger};
pub use shutdown::shutdown_gracefully;
pub use statistics::{print_error_statistics, print_final_statistics, summary_line};
pub use url::{collect_targets, read_targets, split_url_list, validate_target_url};
