//! Core data types shared by the dispatcher, executor and output layers.

use serde::Serialize;

/// HTTP verbs probed against every target, in dispatch order.
///
/// Mixes standard methods with WebDAV and version-control extensions.
/// `NOEXISTE` is not a real method: servers that answer it the same way as
/// `GET` are ignoring the verb entirely, which makes it a useful control.
pub const METHODS: &[&str] = &[
    "CHECKIN",
    "CHECKOUT",
    "CONNECT",
    "COPY",
    "DELETE",
    "GET",
    "HEAD",
    "INDEX",
    "LINK",
    "LOCK",
    "MKCOL",
    "MOVE",
    "NOEXISTE",
    "OPTIONS",
    "ORDERPATCH",
    "PATCH",
    "POST",
    "PROPFIND",
    "PROPPATCH",
    "PUT",
    "REPORT",
    "SEARCH",
    "SHOWMETHOD",
    "SPACEJUMP",
    "TEXTSEARCH",
    "TRACE",
    "TRACK",
    "UNCHECKOUT",
    "UNLINK",
    "UNLOCK",
    "VERSION-CONTROL",
];

/// One (URL, method) pair to probe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    /// Absolute URL with scheme and host
    pub host: String,
    /// HTTP method name, sent verbatim
    pub method: String,
}

impl Target {
    /// Creates a target from a URL and a method name.
    pub fn new(host: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            method: method.into(),
        }
    }
}

/// Builds the full cross-product of URLs and methods.
///
/// Order is URL-major: every method for the first URL, then every method for
/// the second, and so on. Method order follows `methods`.
pub fn cross_product<S: AsRef<str>>(urls: &[String], methods: &[S]) -> Vec<Target> {
    urls.iter()
        .flat_map(|url| methods.iter().map(move |m| Target::new(url.as_str(), m.as_ref())))
        .collect()
}

/// Status line and body size of one completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    /// HTTP status code
    pub status: u16,
    /// Number of body bytes read (0 if the body could not be read fully)
    pub length: usize,
}

/// Result record emitted for every successful probe.
///
/// Serializes as `{"code":..,"target":..,"method":..,"length":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// HTTP status code
    pub code: u16,
    /// URL that was probed
    pub target: String,
    /// Method that was sent
    pub method: String,
    /// Response body length in bytes
    pub length: usize,
}

impl ProbeResult {
    /// Combines a target with the response it produced.
    pub fn from_response(target: Target, response: ProbeResponse) -> Self {
        Self {
            code: response.status,
            target: target.host,
            method: target.method,
            length: response.length,
        }
    }
}
