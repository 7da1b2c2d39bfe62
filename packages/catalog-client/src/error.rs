//! Catalog API error types

use thiserror::Error;

/// Catalog API client errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Client credentials are missing or empty
    #[error("client credentials are required for catalog API access")]
    MissingCredentials,

    /// A data call was made before `authenticate()`
    #[error("catalog client is not authenticated")]
    NotAuthenticated,

    /// The token endpoint rejected the credentials
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid input provided to an API method
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("failed to parse catalog response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog API returned an error status
    #[error("catalog API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the catalog
    #[error("rate limited by catalog API")]
    RateLimited,

    /// Request timeout
    #[error("request to catalog API timed out")]
    Timeout,
}

impl CatalogError {
    /// Check if this error is retryable (transient failure)
    ///
    /// Retries on timeouts, rate limiting, transport errors and server
    /// errors (5xx). Does NOT retry on client errors (4xx except 429)
    /// or authentication failures.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Timeout | CatalogError::RateLimited => true,
            CatalogError::Http(e) => {
                if e.is_timeout() || e.is_connect() {
                    return true;
                }
                matches!(e.status(), Some(status) if status.is_server_error())
            }
            CatalogError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
