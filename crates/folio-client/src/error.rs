//! Error types for folio-client

use thiserror::Error;

/// Result type alias for folio-client operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while fetching a remote source.
///
/// These never reach the rendered page. The loader logs them and keeps
/// the previous snapshot.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FetchError {
    /// Connection, TLS, timeout or body-read failure
    #[error("Network error fetching {url}: {source}")]
    Network {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The body was not the expected JSON shape
    #[error("Malformed payload from {url}: {source}")]
    Parse {
        /// Requested URL
        url: String,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client itself could not be built
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// Whether another attempt could succeed.
    ///
    /// Network failures, 429 and 5xx are transient; 4xx and malformed
    /// payloads are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network { .. } => true,
            FetchError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            FetchError::Parse { .. } => false,
            FetchError::Client(_) => false,
        }
    }

    /// Short category name for logs and health output.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network",
            FetchError::HttpStatus { .. } => "http-status",
            FetchError::Parse { .. } => "parse",
            FetchError::Client(_) => "client",
        }
    }
}
