//! Error types for the domain layer

use thiserror::Error;

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by domain rules
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required field was empty or missing
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Operation attempted on an entity in the wrong state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A persisted identifier does not have the `<prefix>-<number>` shape
    #[error("Corrupt identifier in history: expected '{prefix}-<number>', found '{id}'")]
    CorruptId {
        /// Expected prefix, e.g. "Asset"
        prefix: String,
        /// The offending identifier
        id: String,
    },
}

impl CoreError {
    /// Check if this error is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error is an invalid state transition
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}
