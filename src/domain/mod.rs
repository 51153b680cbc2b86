//! Domain and top-level suffix extraction.
//!
//! Both functions are total: malformed input degrades to an empty string and
//! never produces an error. The suffix is the text after the last dot of the
//! host, not a Public Suffix List lookup, so `example.co.uk` yields `.uk`.
//!
//! Key functions:
//! - `extract_domain()` - Extracts the host from a URL or bare domain
//! - `extract_tld()` - Returns the last dot-segment of a host, prefixed with `.`
//! - `normalize_tld()` - Normalizes user-supplied suffixes (`COM` -> `.com`)

use std::borrow::Cow;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::config::DEFAULT_SCHEME_PREFIX;

/// Compiles a constant pattern, panicking with the pattern on failure.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// A `scheme://` prefix at the very start of the input.
static LEADING_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"^[A-Za-z][A-Za-z0-9+.-]*://", "LEADING_SCHEME"));

/// Extracts the network-location portion of a URL.
///
/// Bare hosts such as `example.com` carry no scheme and would otherwise parse
/// as a relative path, so `http://` is prefixed before parsing whenever the
/// input does not start with a `scheme://` part. A `://` later in the string
/// (e.g. `example.com/out?to=https://other.org`) does not count as a scheme.
///
/// # Returns
///
/// - the host (lower-cased, port dropped) when the URL parses with a host
/// - the path portion when it parses without one (e.g. `file:///tmp/x`)
/// - an empty string when parsing fails
pub fn extract_domain(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let normalized: Cow<'_, str> = if LEADING_SCHEME.is_match(trimmed) {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("{DEFAULT_SCHEME_PREFIX}{trimmed}"))
    };

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => parsed.path().to_string(),
        },
        Err(e) => {
            debug!("Could not parse '{trimmed}' as a URL: {e}");
            String::new()
        }
    }
}

/// Returns the last dot-segment of a domain, prefixed with `.`.
///
/// Accepts a bare domain or a full URL; anything carrying a scheme, port or
/// path is reduced to its host first. Returns an empty string when the host
/// has no dot or ends with one.
pub fn extract_tld(domain: &str) -> String {
    let trimmed = domain.trim();
    let host = if trimmed.contains('/') || trimmed.contains(':') {
        extract_domain(trimmed)
    } else {
        trimmed.to_lowercase()
    };

    match host.rsplit_once('.') {
        Some((_, last)) if !last.is_empty() => format!(".{last}"),
        _ => String::new(),
    }
}

/// Normalizes a user-supplied suffix for comparison against `extract_tld` output.
///
/// `COM`, `.com` and ` .Com ` all become `.com`. Blank input stays blank.
pub fn normalize_tld(tld: &str) -> String {
    let bare = tld.trim().trim_start_matches('.').to_lowercase();
    if bare.is_empty() {
        String::new()
    } else {
        format!(".{bare}")
    }
}
