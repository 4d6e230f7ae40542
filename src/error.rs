//! Error types for the recipe viewer.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for recipe viewer operations.
pub type Result<T> = std::result::Result<T, RecipeError>;

/// Errors that can occur in the recipe viewer.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// Failed to read the recipe source.
    #[error("Failed to read recipe source: {path}")]
    SourceRead {
        /// Path of the source that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecipeError {
    /// Create a SourceRead error.
    pub fn source_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::SourceRead { path, source }
    }
}
