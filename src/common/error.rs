//! Error types for the smoke-test harness
//!
//! Error messages are written to be actionable from a CI log: they say
//! what was being resolved or requested and why it could not complete.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the smoke-test harness
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Backend URL not found. Pass --base-url, set BACKEND_URL, or provide an env file containing {key} (looked in '{path}')")]
    BackendUrlNotFound { key: String, path: String },

    #[error("Failed to read env file '{path}': {error}")]
    EnvFileRead { path: String, error: String },

    // === Transport Errors ===
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to '{url}' returned unexpected status {status}: {body}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        body: String,
    },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a backend-url-not-found error with the key and path searched
    pub fn backend_url_not_found(key: &str, path: &str) -> Self {
        Self::BackendUrlNotFound {
            key: key.to_string(),
            path: path.to_string(),
        }
    }

    /// Create an unexpected-status error, truncating long bodies
    pub fn unexpected_status(url: &str, status: u16, body: &str) -> Self {
        let body = if body.chars().count() > 500 {
            format!("{}...", body.chars().take(500).collect::<String>())
        } else {
            body.to_string()
        };
        Self::UnexpectedStatus {
            url: url.to_string(),
            status,
            body,
        }
    }
}
