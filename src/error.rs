//! Custom error types for citetrack.
//!
//! All library functions return `Result<T, CitetrackError>` instead of using `unwrap()`.

use thiserror::Error;

/// Main error type for citetrack operations.
#[derive(Debug, Error)]
pub enum CitetrackError {
    /// Network/HTTP request error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response did not match the expected schema
    #[error("Parse error: {0}")]
    Parse(String),

    /// External API returned an error
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from API
        message: String,
    },

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using `CitetrackError`
pub type Result<T> = std::result::Result<T, CitetrackError>;
