//! Local precondition checks run before any request leaves the process.

use url::Url;

pub const INVALID_URL_TEXT: &str = "Please enter a valid URL.";
pub const EMPTY_SHORT_TEXT: &str = "Short URL cannot be empty.";

/// Returns `true` for a well-formed absolute `http`/`https` URL with a host.
///
/// Blank input is rejected without parsing.
pub fn is_valid_long_url(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }

    match Url::parse(trimmed) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

/// Returns the slug with surrounding whitespace removed, or `None` if nothing is left.
pub fn normalize_slug(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
