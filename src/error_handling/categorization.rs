//! Error categorization.
//!
//! Maps probe failures onto the `ErrorType` buckets used in the run summary.

use super::stats::ProcessingStats;
use super::types::{ErrorType, ProbeError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Timeouts are checked before connect failures: a connect that hits the
/// deadline reports both, and the timeout is the more useful label.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes a dropped probe.
pub fn categorize_probe_error(error: &ProbeError) -> ErrorType {
    match error {
        ProbeError::InvalidMethod(_) => ErrorType::InvalidMethod,
        ProbeError::InvalidUrl { .. } => ErrorType::InvalidUrl,
        ProbeError::Client(_) => ErrorType::ClientInit,
        ProbeError::Transport(e) => categorize_reqwest_error(e),
    }
}

/// Records a dropped probe in `stats`.
pub fn update_error_stats(stats: &ProcessingStats, error: &ProbeError) {
    stats.increment_error(categorize_probe_error(error));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_categorize_construction_errors() {
        assert_eq!(
            categorize_probe_error(&ProbeError::InvalidMethod("A B".into())),
            ErrorType::InvalidMethod
        );
        let parse_err = url::Url::parse("not a url").unwrap_err();
        assert_eq!(
            categorize_probe_error(&ProbeError::InvalidUrl {
                url: "not a url".into(),
                source: parse_err,
            }),
            ErrorType::InvalidUrl
        );
    }

    #[tokio::test]
    async fn test_categorize_connect_error() {
        // Port 1 on localhost is closed on any sane test machine
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to build client");
        let err = client
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .expect_err("Connection to a closed port should fail");
        let category = categorize_probe_error(&ProbeError::Transport(err));
        assert_eq!(category, ErrorType::HttpRequestConnectError);
    }

    #[test]
    fn test_update_error_stats_increments() {
        let stats = ProcessingStats::new();
        update_error_stats(&stats, &ProbeError::InvalidMethod("A B".into()));
        update_error_stats(&stats, &ProbeError::InvalidMethod("C D".into()));
        assert_eq!(stats.get_error_count(ErrorType::InvalidMethod), 2);
        assert_eq!(stats.total_errors(), 2);
    }
}
