//! Error type definitions.
//!
//! This module defines the error enums used throughout the application and the
//! categories failed probes are counted under.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
///
/// HTTP clients are built lazily by the pool, so their failures surface per
/// probe as `ProbeError::Client` instead.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Configuration errors. These are fatal and stop the run before dispatch.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No target survived validation.
    #[error("empty target list")]
    EmptyTargetList,

    /// A `-H` value could not be turned into an HTTP header.
    #[error("invalid header {header:?}: {reason}")]
    InvalidHeader {
        /// The header line as supplied
        header: String,
        /// Why it was rejected
        reason: String,
    },

    /// Reading targets from stdin failed.
    #[error("failed to read targets from stdin: {0}")]
    Stdin(#[from] std::io::Error),
}

/// Errors from a single probe.
///
/// These never leave the worker that produced them: the probe is dropped and
/// the error is only counted.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The method name is not a valid HTTP token.
    #[error("invalid method {0:?}")]
    InvalidMethod(String),

    /// The target is not a parseable URL.
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        /// The URL as supplied
        url: String,
        /// Parser error
        source: url::ParseError,
    },

    /// A pooled client could not be created.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] ReqwestError),

    /// Connect, DNS, TLS, timeout or any other failure while sending.
    #[error("request failed: {0}")]
    Transport(#[source] ReqwestError),
}

/// Categories dropped probes are counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Request construction
    /// Method name is not a valid HTTP token
    InvalidMethod,
    /// Target could not be parsed as a URL
    InvalidUrl,
    /// No HTTP client could be built for the request
    ClientInit,
    // HTTP/Network errors
    /// Request could not be built by the HTTP client
    HttpRequestBuilderError,
    /// Redirect handling failed
    HttpRequestRedirectError,
    /// Request exceeded its timeout
    HttpRequestTimeoutError,
    /// Connection could not be established
    HttpRequestConnectError,
    /// Request failed while being sent
    HttpRequestRequestError,
    /// Response body failed to arrive
    HttpRequestBodyError,
    /// Any other HTTP client failure
    HttpRequestOtherError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable label used in the end-of-run summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidMethod => "Invalid method",
            ErrorType::InvalidUrl => "Invalid URL",
            ErrorType::ClientInit => "HTTP client init error",
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
        }
    }
}
