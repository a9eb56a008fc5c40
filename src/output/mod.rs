//! Result rendering.
//!
//! Workers hand every successful probe to a `ResultSink`. The sinks here
//! format records as plain tab-separated lines or as JSON lines, or collect
//! them in memory for library callers.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use log::warn;

use crate::config::{OutputFormat, METHOD_COLUMN_WIDTH};
use crate::models::ProbeResult;

/// Receives result records from workers.
///
/// Called concurrently from every worker; implementations synchronize
/// internally. Emission order across workers is unspecified.
pub trait ResultSink: Send + Sync {
    /// Handles one result record.
    fn emit(&self, result: ProbeResult);
}

/// Renders `result` as `code<TAB>length<TAB>method target`.
///
/// The method is padded with spaces to `METHOD_COLUMN_WIDTH` so targets line
/// up. Methods at or over the width are followed directly by the target.
pub fn format_plain(result: &ProbeResult) -> String {
    format!(
        "{}\t{}\t{:<width$}{}",
        result.code,
        result.length,
        result.method,
        result.target,
        width = METHOD_COLUMN_WIDTH
    )
}

/// Renders `result` as a single-line JSON object.
pub fn format_json(result: &ProbeResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Renders `result` in `format`. Returns `None` if serialization fails.
pub fn format_result(result: &ProbeResult, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Plain => Some(format_plain(result)),
        OutputFormat::Json => match format_json(result) {
            Ok(line) => Some(line),
            Err(e) => {
                warn!("Failed to serialize result for {}: {}", result.target, e);
                None
            }
        },
    }
}

/// Writes one formatted line per result to a writer.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    format: OutputFormat,
}

impl<W: Write + Send> WriterSink<W> {
    /// Creates a sink writing `format` lines to `writer`.
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> ResultSink for WriterSink<W> {
    fn emit(&self, result: ProbeResult) {
        let Some(line) = format_result(&result, self.format) else {
            return;
        };
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // Flush per line so results show up while the scan is running
        if let Err(e) = writeln!(writer, "{line}").and_then(|()| writer.flush()) {
            warn!("Failed to write result: {}", e);
        }
    }
}

/// Sink that writes to stdout.
pub fn stdout_sink(format: OutputFormat) -> WriterSink<std::io::Stdout> {
    WriterSink::new(std::io::stdout(), format)
}

/// Sink that keeps every record in memory.
#[derive(Default)]
pub struct CollectingSink {
    results: Mutex<Vec<ProbeResult>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records collected so far, in arrival order.
    pub fn results(&self) -> Vec<ProbeResult> {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Consumes the sink and returns its records.
    pub fn into_results(self) -> Vec<ProbeResult> {
        self.results
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ResultSink for CollectingSink {
    fn emit(&self, result: ProbeResult) {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(result);
    }
}
