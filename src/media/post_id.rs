//! Post identifier extraction from platform URLs.

use std::sync::OnceLock;

use regex::Regex;

/// Identifier used when a URL does not match any known post shape.
pub const UNKNOWN_POST_ID: &str = "unknown_post";

fn post_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"instagram\.com/(?:p|reel)/([a-zA-Z0-9_-]+)/?").expect("valid post pattern")
    })
}

/// Extract the post or reel identifier from a URL.
///
/// Returns [`UNKNOWN_POST_ID`] for anything that doesn't look like a
/// `.../p/<id>/` or `.../reel/<id>/` link.
pub fn extract_post_id(url: &str) -> &str {
    post_pattern()
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .unwrap_or(UNKNOWN_POST_ID)
}
