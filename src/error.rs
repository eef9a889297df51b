//! Error types for sync-version.
//!
//! All operations return `Result<T>` which aliases `Result<T, SyncError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from version sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Version argument rejected before any file was touched.
    #[error("Invalid version '{0}': {1}")]
    InvalidVersion(String, String),

    /// Manifest is not valid JSON.
    #[error("Failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest parsed but is not shaped like a manifest.
    #[error("Invalid manifest {}: {reason}", .path.display())]
    InvalidManifest { path: PathBuf, reason: String },

    /// File could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed (missing root, permission denied, ...).
    #[error("Failed to scan directory: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for sync-version operations.
pub type Result<T> = std::result::Result<T, SyncError>;
