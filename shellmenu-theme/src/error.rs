// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Style Error Types
//!
//! Errors raised while loading menu styles from configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading menu styles.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Style file was not found.
    #[error("Style file not found: {path:?}")]
    StyleFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a style file.
    #[error("Failed to parse style file {path:?}: {details}")]
    StyleParse {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// A color string could not be decoded.
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for style operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a style file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::StyleFileNotFound { path: path.into() }
    }

    /// Create a style parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::StyleParse {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidColor {
            value: value.into(),
            reason,
        }
    }
}
