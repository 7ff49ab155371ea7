//! Error types for a cleanup run

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while discovering or cleaning files
#[derive(Debug, Error)]
pub enum CleanError {
    /// Root path does not exist
    #[error("path not found: {0}")]
    RootNotFound(PathBuf),

    /// Root path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("{path} is not valid UTF-8")]
    Decode {
        /// File being decoded
        path: PathBuf,
    },

    /// File could not be written back
    #[error("failed to write {path}: {source}")]
    Write {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Error walking directory tree
    #[error("walkdir error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl CleanError {
    /// Whether this error aborts the whole run rather than a single file
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::RootNotFound(_) | Self::NotADirectory(_))
    }

    /// Path the error refers to, when there is one
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::RootNotFound(path) | Self::NotADirectory(path) => Some(path),
            Self::Read { path, .. } | Self::Decode { path } | Self::Write { path, .. } => {
                Some(path)
            },
            Self::Walk(err) => err.path(),
        }
    }
}
