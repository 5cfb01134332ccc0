// src/fetch/error.rs
// =============================================================================
// The single error kind a crawl step can fail with.
//
// Network failures, bad HTTP status codes, unreadable fixture files and
// markup we cannot make sense of all end up here. The crawler does not try
// to recover from any of them; it hands the error straight to its caller.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout, broken body...
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but not with a 2xx
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Offline mode could not read the stored copy of a page
    #[error("could not read fixture {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document has no article body we know how to read
    #[error("could not parse {url}: {reason}")]
    Parse { url: String, reason: String },

    /// The URL cannot be mapped onto a page
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl FetchError {
    // True when the failure came from the network rather than the content
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network { .. } | FetchError::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = FetchError::Parse {
            url: "https://en.wikipedia.org/wiki/A".to_string(),
            reason: "missing #mw-content-text".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not parse https://en.wikipedia.org/wiki/A: missing #mw-content-text"
        );
        assert!(!err.is_network());
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = FetchError::Io {
            path: PathBuf::from("fixtures/en.wikipedia.org/wiki/Nope"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("fixtures/en.wikipedia.org/wiki/Nope"));
    }
}
