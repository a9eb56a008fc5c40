//! Target URL validation and sources.

use std::io::BufRead;

use log::debug;

use crate::error_handling::ConfigError;

/// Validates a target URL.
///
/// A target is accepted only if it parses as an absolute URL with both a
/// scheme and a host. Accepted targets are kept as written (trimmed) so
/// output shows them the way the user typed them; invalid entries are
/// dropped with a debug log.
///
/// # Returns
///
/// `Some(url)` if the URL is usable, `None` otherwise.
pub fn validate_target_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match url::Url::parse(raw) {
        Ok(parsed) if parsed.has_host() && parsed.host_str().is_some_and(|h| !h.is_empty()) => {
            Some(raw.to_string())
        }
        Ok(_) => {
            debug!("Skipping URL without host: {raw}");
            None
        }
        Err(e) => {
            debug!("Skipping invalid URL {raw}: {e}");
            None
        }
    }
}

/// Splits a comma-separated `--url` value into raw entries.
///
/// Empty entries are removed; validation happens later.
pub fn split_url_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads raw target URLs from `reader`, one per line.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns `ConfigError::Stdin` if reading fails.
pub fn read_targets<R: BufRead>(reader: R) -> Result<Vec<String>, ConfigError> {
    let mut targets = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            targets.push(trimmed.to_string());
        }
    }
    Ok(targets)
}

/// Validates every raw URL, keeping input order.
///
/// # Errors
///
/// Returns `ConfigError::EmptyTargetList` if nothing survives validation.
pub fn collect_targets<S: AsRef<str>>(raw: &[S]) -> Result<Vec<String>, ConfigError> {
    let targets: Vec<String> = raw
        .iter()
        .filter_map(|u| validate_target_url(u.as_ref()))
        .collect();
    debug!("{} of {} targets passed validation", targets.len(), raw.len());
    if targets.is_empty() {
        return Err(ConfigError::EmptyTargetList);
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_http_and_https() {
        assert_eq!(
            validate_target_url("https://example.com"),
            Some("https://example.com".to_string())
        );
        assert_eq!(
            validate_target_url("http://example.com:8080/admin?x=1"),
            Some("http://example.com:8080/admin?x=1".to_string())
        );
    }

    #[test]
    fn test_validate_rejects_missing_scheme() {
        assert_eq!(validate_target_url("example.com"), None);
        assert_eq!(validate_target_url("/relative/path"), None);
    }

    #[test]
    fn test_validate_rejects_missing_host() {
        assert_eq!(validate_target_url("mailto:someone@example.com"), None);
        assert_eq!(validate_target_url("file:///etc/passwd"), None);
        assert_eq!(validate_target_url("http://"), None);
    }

    #[test]
    fn test_validate_rejects_garbage() {
        assert_eq!(validate_target_url("not a url at all!!!"), None);
        assert_eq!(validate_target_url(""), None);
        assert_eq!(validate_target_url("   "), None);
        assert_eq!(
            validate_target_url("  https://padded.example  "),
            Some("https://padded.example".to_string())
        );
    }

    #[test]
    fn test_validate_accepts_other_schemes_with_host() {
        // Scheme is not restricted; the request simply fails later
        assert_eq!(
            validate_target_url("ftp://files.example.com"),
            Some("ftp://files.example.com".to_string())
        );
    }

    #[test]
    fn test_split_url_list() {
        assert_eq!(
            split_url_list("a, https://x.y,,http://z "),
            vec!["a", "https://x.y", "http://z"]
        );
        assert!(split_url_list("").is_empty());
        assert!(split_url_list(",,").is_empty());
    }

    #[test]
    fn test_read_targets_skips_blank_lines() {
        let input = "https://a.example\n\n  \nhttps://b.example\r\nnot a url\n";
        let targets = read_targets(input.as_bytes()).expect("in-memory read");
        assert_eq!(
            targets,
            vec!["https://a.example", "https://b.example", "not a url"]
        );
    }

    #[test]
    fn test_collect_targets_drops_invalid() {
        let targets =
            collect_targets(&["a", "https://x.y", "", "http://z"]).expect("two valid targets");
        assert_eq!(targets, vec!["https://x.y", "http://z"]);
    }

    #[test]
    fn test_collect_targets_empty_is_error() {
        let err = collect_targets(&["nope", "also nope"]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyTargetList));
        assert!(matches!(
            collect_targets::<&str>(&[]),
            Err(ConfigError::EmptyTargetList)
        ));
    }
}
