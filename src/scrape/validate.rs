// src/scrape/validate.rs
// =============================================================================
// Checks whether a command-line argument is a URL we can scrape.
//
// A valid URL here is absolute, has a host, and uses http or https.
// Anything else (bare hostnames, relative paths, mailto:, ftp://) is
// rejected before the first request goes out.
// =============================================================================

use url::Url;

/// Returns true if `s` is an absolute http(s) URL with a host
pub fn is_valid_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}
