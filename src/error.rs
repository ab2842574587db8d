//! Error types for ios-deployment-target.
//!
//! All operations return `Result<T>` which aliases `Result<T, PatchError>`.

use std::path::PathBuf;
use thiserror::Error;

use crate::fs::MissingFileContext;

/// Errors from patch operations.
#[derive(Debug, Error)]
pub enum PatchError {
    /// A mandatory file does not exist.
    ///
    /// Carries the working directory and a listing of the nearest existing
    /// ancestor so build logs show where the tool was looking.
    #[error("{label} not found\n{context}")]
    MissingFile {
        label: &'static str,
        context: MissingFileContext,
    },

    /// File was written but re-reading it did not show the expected line.
    #[error("Verification failed for {}: expected `{expected}`", .path.display())]
    VerificationFailed { path: PathBuf, expected: String },

    /// Target version is not a dotted numeric version.
    #[error("Invalid target version '{0}': {1}")]
    InvalidVersion(String, String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ios-deployment-target operations.
pub type Result<T> = std::result::Result<T, PatchError>;
