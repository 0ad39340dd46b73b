//! Error types for shield-rs

use thiserror::Error;

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, ShieldError>;

/// Analyzer error types
#[derive(Error, Debug)]
pub enum ShieldError {
    /// Nothing to analyze: empty or whitespace-only text
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error, timeout, or non-success status from the remote endpoint
    #[error("Transport error: {0}")]
    Transport(String),

    /// Unexpected failure during evaluation
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
