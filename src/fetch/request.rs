//! Request header construction.
//!
//! Every probe carries a browser-like User-Agent followed by the caller's
//! extra headers. Extra headers are applied after the default, so a caller
//! can replace the User-Agent or any earlier header with the same name.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use crate::config::DEFAULT_USER_AGENT;
use crate::error_handling::ConfigError;

/// Headers sent with every probe of a run.
///
/// Parsed once up front; a malformed header is a configuration error and stops
/// the run before any request is sent.
#[derive(Debug, Clone)]
pub struct RequestHeaders {
    map: HeaderMap,
}

impl RequestHeaders {
    /// Builds the header set from the default User-Agent and `extra`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidHeader` for a header whose name or value
    /// cannot be sent over HTTP.
    pub fn new<S: AsRef<str>>(extra: &[S]) -> Result<Self, ConfigError> {
        let mut map = HeaderMap::new();
        map.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        for line in extra {
            let (name, value) = parse_header_line(line.as_ref())?;
            // insert() replaces, so the last write for a name wins
            map.insert(name, value);
        }
        Ok(Self { map })
    }

    /// The effective header map.
    pub fn header_map(&self) -> &HeaderMap {
        &self.map
    }
}

impl Default for RequestHeaders {
    fn default() -> Self {
        let mut map = HeaderMap::new();
        map.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        Self { map }
    }
}

/// Parses one `"Name: value"` header line.
///
/// The name is everything before the first colon. The value is everything
/// after it, colons included, so `X-Token: a:b:c` yields `a:b:c`. Surrounding
/// whitespace is trimmed from both. A line without a colon is a header with
/// an empty value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidHeader` if the name is not a valid HTTP token
/// or the value contains control characters.
pub fn parse_header_line(line: &str) -> Result<(HeaderName, HeaderValue), ConfigError> {
    let (name, value) = line.split_once(':').unwrap_or((line, ""));
    let invalid = |reason: String| ConfigError::InvalidHeader {
        header: line.to_string(),
        reason,
    };

    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .map_err(|e| invalid(format!("invalid name: {e}")))?;
    let value =
        HeaderValue::from_str(value.trim()).map_err(|e| invalid(format!("invalid value: {e}")))?;
    Ok((name, value))
}
