//! Error types and handling infrastructure for cache-busting a file

use std::io;
use std::path::{Path, PathBuf};

/// Every way a bust run can fail. Each variant is fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum BustError {
    #[error("Error: file not specified")]
    MissingInput,

    #[error("File does not exist: \"{}\"", .path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid input file \"{}\": {reason}", .path.display())]
    InvalidInput { path: PathBuf, reason: String },

    #[error("Error reading file: \"{}\"", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing file: \"{}\"", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BustError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn invalid_input(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => {
                format!("{} ({})", self, source)
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for bust operations
pub type BustResult<T> = Result<T, BustError>;
