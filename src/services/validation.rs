//! JSON validation for decklist files.
//!
//! [`validate_json`] keeps the failure reason so callers can tell a missing file
//! from a malformed one. [`is_valid_json`] collapses that to a `bool` for the shell.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use thiserror::Error;

/// Reasons a file is not a usable JSON document
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("File not found: {0}")]
    NotFound(Utf8PathBuf),

    #[error("Failed to read {path}: {source}")]
    Unreadable {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Malformed {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ValidationError {
    /// Path of the file that failed validation
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::NotFound(path) => path,
            Self::Unreadable { path, .. } | Self::Malformed { path, .. } => path,
        }
    }
}

/// Read and parse `file_path` as JSON.
///
/// The file is read fully and closed before parsing. Invalid UTF-8 is reported
/// as [`ValidationError::Malformed`].
pub fn validate_json(file_path: &Utf8Path) -> Result<Value, ValidationError> {
    let bytes = fs::read(file_path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ValidationError::NotFound(file_path.to_path_buf())
        } else {
            ValidationError::Unreadable {
                path: file_path.to_path_buf(),
                source: e,
            }
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|e| ValidationError::Malformed {
        path: file_path.to_path_buf(),
        source: e,
    })
}

/// `true` if `file_path` exists, is readable and parses as JSON.
pub fn is_valid_json(file_path: &Utf8Path) -> bool {
    match validate_json(file_path) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!("{}", e);
            false
        }
    }
}
