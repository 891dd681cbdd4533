//! Error types for lj2hugo

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the lj2hugo application
#[derive(Debug, Error)]
pub enum Lj2HugoError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Lj2HugoError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Lj2HugoError::Read { .. } => 2,
            Lj2HugoError::Parse { .. } => 3,
            Lj2HugoError::Write { .. } => 4,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            Lj2HugoError::Read { path, source } => {
                format!(
                    "Cannot read {}: {}\n\n\
                    Suggestions:\n\
                    • Check that the file exists and is readable\n\
                    • Entry exports are usually named like L-1234; pass the\n\
                      entry file, not the C-1234 comment file",
                    path.display(),
                    source
                )
            }
            Lj2HugoError::Parse { path, message } => {
                format!(
                    "Cannot parse {}: {}\n\n\
                    Suggestions:\n\
                    • The file must be an XML export as produced by ljdump\n\
                    • Entry files have an <event> root element; comment files\n\
                      have a <comments> root element\n\
                    • Event times must look like YYYY-MM-DD HH:MM:SS",
                    path.display(),
                    message
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using Lj2HugoError
pub type Result<T> = std::result::Result<T, Lj2HugoError>;
