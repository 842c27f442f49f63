//! # Error Module
//!
//! Unified error handling for the wavcarve crate.
//! Only fatal conditions live here. Per-candidate scan rejections are
//! skip-and-continue conditions handled inside the extraction loop.

use std::path::PathBuf;

use thiserror::Error;

/// Central error type for wavcarve operations.
#[derive(Debug, Error)]
pub enum WavCarveError {
    /// Resource path is missing or is not a regular file
    #[error("input file not found or not a regular file: {0}")]
    InputNotFound(PathBuf),

    /// A configuration value failed its attribute's validation
    #[error("invalid value for {option}: {reason}")]
    InvalidConfigValue {
        option: &'static str,
        reason: String,
    },

    /// Caller tried to set a configuration attribute that does not exist
    #[error("unknown config option: {0}")]
    UnknownConfigOption(String),

    /// Output path allocation was invoked before the output directory existed
    #[error("output directory missing: {0}")]
    OutputDirectoryMissing(PathBuf),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl WavCarveError {
    /// Create an invalid-config-value error for a named attribute
    pub fn invalid_config(option: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            option,
            reason: reason.into(),
        }
    }
}

/// Result type alias using WavCarveError
pub type Result<T> = std::result::Result<T, WavCarveError>;
