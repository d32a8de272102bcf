//! Error types for catalog operations
//!
//! Provides unified error handling for slot persistence and payload decoding.

use thiserror::Error;

/// Errors that can occur while persisting or decoding catalog data
#[derive(Error, Debug)]
pub enum CatalogError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Slot (de)serialization error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Encoded payload is not valid base64
    #[error("Payload decode error: {0}")]
    Payload(#[from] base64::DecodeError),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
