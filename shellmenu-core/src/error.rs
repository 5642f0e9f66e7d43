// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Configuration Error Types
//!
//! The menu engine itself never fails: invalid indices and malformed ids are
//! silent no-ops. Only loading a [ContentConfig](crate::config::ContentConfig)
//! can produce an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading menu configuration.
#[derive(Error, Debug)]
pub enum MenuError {
    /// Configuration file was not found.
    #[error("Menu config file not found: {path:?}")]
    ConfigFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a configuration file.
    #[error("Failed to parse menu config {path:?}: {details}")]
    ConfigParse {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// A variant name other than `popup` or `dock`.
    #[error("Unknown menu variant '{name}'")]
    UnknownVariant {
        /// The rejected name.
        name: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations.
pub type MenuResult<T> = Result<T, MenuError>;

impl MenuError {
    /// Create a config file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigFileNotFound { path: path.into() }
    }

    /// Create a config parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an unknown variant error.
    pub fn unknown_variant(name: impl Into<String>) -> Self {
        Self::UnknownVariant { name: name.into() }
    }
}
