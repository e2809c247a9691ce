//! Error types for the refurb store

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur when loading, saving or exporting documents
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid JSON or do not match the record schema
    #[error("Malformed document {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Export file could not be created or written
    #[error("Export to {path} failed: {message}")]
    Export {
        /// Target export file
        path: PathBuf,
        /// What went wrong
        message: String,
    },
}

impl StoreError {
    /// Create an export error for a target file
    pub fn export(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Export {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error came from loading or saving a document
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::Read { .. } | Self::Write { .. } | Self::Malformed { .. }
        )
    }

    /// Check if this error came from writing an export
    pub fn is_export(&self) -> bool {
        matches!(self, Self::Export { .. })
    }

    /// File the error relates to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::Malformed { path, .. }
            | Self::Export { path, .. } => path,
        }
    }
}
