//! Error types for Dropslot

use thiserror::Error;

/// Main error type for Dropslot operations
#[derive(Debug, Error)]
pub enum DropslotError {
    /// Error in catalog definition
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Error assembling an exercise session
    #[error("Session error: {0}")]
    Session(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Dropslot operations
pub type Result<T> = std::result::Result<T, DropslotError>;
