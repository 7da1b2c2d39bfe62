//! Chart provider error types

use thiserror::Error;

/// Chart provider client errors
#[derive(Error, Debug)]
pub enum ChartError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("failed to parse chart response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The chart provider returned an error status
    #[error("chart provider error {status}: {body}")]
    Api { status: u16, body: String },
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
