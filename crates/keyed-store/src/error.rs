//! Error types for the keyed-store crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when a storage key is not usable as a file name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyValidationError {
    /// Key was empty once trimmed.
    #[error("storage key must not be empty")]
    Empty,
    /// Key contained leading or trailing whitespace.
    #[error("storage key must not contain surrounding whitespace")]
    SurroundingWhitespace,
    /// Key was not a single plain path component.
    #[error("storage key '{key}' must be a single file name")]
    NotAFileName {
        /// The rejected key.
        key: String,
    },
}

/// Errors surfaced while reading or writing stored values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyedStoreError {
    /// The storage directory could not be created or opened.
    #[error("failed to open storage directory '{path}': {message}")]
    Open {
        /// Directory that failed to open.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A stored value could not be read.
    #[error("failed to read stored value '{key}': {message}")]
    Read {
        /// Key whose value failed to load.
        key: String,
        /// Description of the I/O error.
        message: String,
    },

    /// A value could not be written.
    #[error("failed to write stored value '{key}': {message}")]
    Write {
        /// Key whose value failed to persist.
        key: String,
        /// Description of the I/O error.
        message: String,
    },

    /// A value could not be removed.
    #[error("failed to remove stored value '{key}': {message}")]
    Remove {
        /// Key whose value failed to be removed.
        key: String,
        /// Description of the I/O error.
        message: String,
    },
}
