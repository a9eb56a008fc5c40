//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_WORKER_COUNT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Result line format written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `code<TAB>length<TAB>method target`
    Plain,
    /// One JSON object per line
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through `clap`.
///
/// # Examples
///
/// ```no_run
/// use verb_tamper::Config;
///
/// let config = Config {
///     urls: vec!["https://example.com".to_string()],
///     worker_count: 20,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw target URLs (validated before dispatch)
    pub urls: Vec<String>,

    /// Read additional target URLs from stdin, one per line
    pub use_stdin: bool,

    /// Number of concurrent workers; zero or negative performs no requests
    pub worker_count: i32,

    /// Per-request timeout in seconds; 0 disables the timeout
    pub timeout_seconds: u64,

    /// Extra request headers, each `"Name: value"`
    pub headers: Vec<String>,

    /// Result output format
    pub output_format: OutputFormat,

    /// Suppress the banner
    pub silent: bool,

    /// Verify TLS certificates (disabled by default)
    pub verify_tls: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Per-request timeout. Zero seconds means requests never time out.
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            use_stdin: false,
            worker_count: DEFAULT_WORKER_COUNT,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            headers: Vec::new(),
            output_format: OutputFormat::Plain,
            silent: false,
            verify_tls: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Single target
/// verb_tamper --url https://example.com
///
/// # Several targets, JSON output, custom header
/// verb_tamper --url https://a.example,https://b.example --json -H 'X-Api-Key: secret'
///
/// # Targets from stdin
/// cat urls.txt | verb_tamper --stdin --silent -t 50
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "verb_tamper",
    version,
    about = "Probes URLs with every HTTP verb and reports status codes and body lengths."
)]
pub struct Opt {
    /// Comma separated URLs to check
    #[arg(long, default_value = "")]
    pub url: String,

    /// Read target URLs from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Number of threads to use
    #[arg(short = 't', long = "threads", default_value_t = DEFAULT_WORKER_COUNT, allow_negative_numbers = true)]
    pub threads: i32,

    /// Seconds to wait before timeout (0 waits forever)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Request header, repeatable: -H 'X-Api-Key: MyApiKey' -H 'Content-Type: application/json'
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Output format as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable banner
    #[arg(long)]
    pub silent: bool,

    /// Verify TLS certificates (off by default so self-signed targets can be probed)
    #[arg(long)]
    pub verify_tls: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        let urls = if opt.stdin {
            Vec::new()
        } else {
            crate::app::split_url_list(&opt.url)
        };
        Self {
            urls,
            use_stdin: opt.stdin,
            worker_count: opt.threads,
            timeout_seconds: opt.timeout,
            headers: opt.headers,
            output_format: if opt.json {
                OutputFormat::Json
            } else {
                OutputFormat::Plain
            },
            silent: opt.silent,
            verify_tls: opt.verify_tls,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.worker_count, 10);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.output_format, OutputFormat::Plain);
        assert!(!config.verify_tls);
        assert!(!config.use_stdin);
        assert!(config.urls.is_empty());
    }

    #[test]
    fn test_zero_timeout_disables_deadline() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert_eq!(config.timeout(), None);

        let opt = Opt::try_parse_from(["verb_tamper", "--url", "https://x.y", "--timeout", "0"])
            .expect("zero is a valid timeout");
        assert_eq!(Config::from(opt).timeout(), None);
    }

    #[test]
    fn test_opt_defaults() {
        let opt = Opt::try_parse_from(["verb_tamper", "--url", "https://example.com"])
            .expect("Should parse minimal arguments");
        assert_eq!(opt.threads, 10);
        assert_eq!(opt.timeout, 10);
        assert!(!opt.json);
        assert!(!opt.silent);
        assert!(opt.headers.is_empty());
    }

    #[test]
    fn test_opt_into_config_splits_urls() {
        let opt = Opt::try_parse_from([
            "verb_tamper",
            "--url",
            "https://a.example,https://b.example",
            "--json",
            "-H",
            "X-Token: a:b:c",
            "-H",
            "User-Agent: custom",
            "-t",
            "3",
        ])
        .expect("Should parse arguments");
        let config = Config::from(opt);
        assert_eq!(
            config.urls,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.worker_count, 3);
        assert_eq!(config.headers, vec!["X-Token: a:b:c", "User-Agent: custom"]);
    }

    #[test]
    fn test_opt_accepts_negative_threads() {
        let opt = Opt::try_parse_from(["verb_tamper", "--url", "http://x.y", "-t", "-1"])
            .expect("Negative worker counts are accepted");
        assert_eq!(Config::from(opt).worker_count, -1);
    }

    #[test]
    fn test_opt_stdin_ignores_url_flag() {
        let opt = Opt::try_parse_from(["verb_tamper", "--stdin", "--url", "http://x.y"])
            .expect("Should parse");
        let config = Config::from(opt);
        assert!(config.use_stdin);
        assert!(config.urls.is_empty());
    }
}
