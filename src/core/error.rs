//! Error types and error handling for the Kotoba dictionary service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (HTTP status codes
//! and response bodies) is handled in the respective adapter modules.

use thiserror::Error;

/// Result type alias for Kotoba operations
pub type Result<T> = std::result::Result<T, KotobaError>;

/// Main error type for the Kotoba service
#[derive(Error, Debug)]
pub enum KotobaError {
    /// Query parameter absent or empty. Raised before classification.
    #[error("Missing query parameter: q")]
    MissingQuery,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Any failure inside the dictionary store, including malformed
    /// full-text syntax and timeouts around a search.
    #[error("{0}")]
    StoreError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl From<rusqlite::Error> for KotobaError {
    fn from(err: rusqlite::Error) -> Self {
        KotobaError::StoreError(err.to_string())
    }
}

impl KotobaError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, KotobaError::MissingQuery | KotobaError::InvalidQuery(_))
    }

    /// Check if this error came from the dictionary store
    pub fn is_store_failure(&self) -> bool {
        matches!(self, KotobaError::StoreError(_))
    }
}
