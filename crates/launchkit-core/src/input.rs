//! Input normalization helpers.
//!
//! Soft validation only: these probes inform the UI and guards, they never
//! block rendering.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref URL_PROBE: Regex = Regex::new(r"^https?://[^\s/]+\.[^\s]+").unwrap();
    static ref EMAIL_PROBE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// Split a comma-separated service list: trim each entry, drop empties,
/// preserve user order. Duplicates are kept; the user wrote them.
pub fn split_services(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    MULTI_SPACE.replace_all(text.trim(), " ").to_string()
}

/// Whether the trimmed input resembles an http(s) URL.
pub fn looks_like_url(text: &str) -> bool {
    URL_PROBE.is_match(text.trim())
}

/// Whether the trimmed input resembles an email address.
pub fn looks_like_email(text: &str) -> bool {
    EMAIL_PROBE.is_match(text.trim())
}
