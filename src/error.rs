//! Error handling module for drawable-wrap
//!
//! Provides the library error type using thiserror. The binary wraps these
//! in `anyhow` at the application boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for drawable-wrap
#[derive(Error, Debug)]
pub enum DrawableError {
    /// IO errors (rename, write, create_dir)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal errors
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Conventions errors (loading, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A resource name that Android would reject
    #[error("Invalid resource name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// A rename target that already exists
    #[error("Rename target already exists: {}", .0.display())]
    Collision(PathBuf),

    /// Two assets that map to the same wrapper with different content
    #[error("Conflicting wrapper {}: referenced by both '{first}' and '{second}'", .path.display())]
    Conflict {
        path: PathBuf,
        first: String,
        second: String,
    },
}

/// Result type alias for drawable-wrap operations
pub type Result<T> = std::result::Result<T, DrawableError>;

impl DrawableError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid resource name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
