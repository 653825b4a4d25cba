// src/error.rs
// =============================================================================
// Error types shared by the scrape pipeline and the link store.
//
// - ScrapeError: everything that can abort a run (bad input, a failed fetch,
//   an extraction failure, a failed write)
// - StoreError: what can go wrong touching the link collection file
//
// Reading the collection never surfaces a StoreError to the run: the store
// turns it into an empty history (see store.rs). Writing does, wrapped in
// ScrapeError::StoreWrite.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scrape run
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// No URLs were given on the command line
    #[error("No url(s).")]
    NoUrls,

    /// An input URL is not an absolute http(s) URL
    #[error("\"{0}\" is not a valid URL.")]
    InvalidUrl(String),

    /// The request never produced a response (DNS, connect, timeout, reset)
    #[error("Failed to fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Failed to fetch {url}: HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Links could not be extracted from the page
    #[error("Failed to parse {url}: {reason}")]
    Parse { url: String, reason: String },

    /// The merged collection could not be written
    #[error("Failed to write links to '{}': {source}", .path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: StoreError,
    },
}

/// Errors from reading or writing the link collection file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid link collection: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// True when the file simply does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        assert_eq!(ScrapeError::NoUrls.to_string(), "No url(s).");
        assert_eq!(
            ScrapeError::InvalidUrl("nope".to_string()).to_string(),
            "\"nope\" is not a valid URL."
        );
    }

    #[test]
    fn test_status_error_message() {
        let err = ScrapeError::Status {
            url: "https://example.com".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch https://example.com: HTTP 404 Not Found"
        );
    }

    #[test]
    fn test_not_found_detection() {
        let missing = StoreError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(missing.is_not_found());

        let denied = StoreError::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(!denied.is_not_found());
    }
}
