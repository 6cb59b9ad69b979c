//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record failed validation before persisting.
    #[error("invalid collection: {0}")]
    Validation(String),

    /// Stored document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Atomic replacement of the stored document failed.
    #[error("persist error: {0}")]
    Persist(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
