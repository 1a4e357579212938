//! Error types for the pngsquash conversion pipeline.
//!
//! Fatal errors abort a run. Per-file errors are caught at the file boundary
//! and surface only through reports and observer events.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for pngsquash operations.
#[derive(Error, Debug)]
pub enum PngSquashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline errors that abort the run
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline errors.
///
/// `RootNotFound`, `Traversal` and `EncoderUnavailable` are fatal for a run.
/// The rest describe a single file's failure.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The configured root directory does not exist
    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),

    /// Directory traversal failed
    #[error("Traversal failed under {path}: {message}")]
    Traversal { path: PathBuf, message: String },

    /// The build has no codec for a required format
    #[error("No {format} {direction} available in this build")]
    EncoderUnavailable {
        format: &'static str,
        direction: &'static str,
    },

    /// Reading or decoding an image failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Encoding or writing an image failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// The output extension maps to no known image format
    #[error("Unsupported output format for {path}")]
    UnsupportedOutput { path: PathBuf },

    /// Removing a temporary file failed
    #[error("Cleanup failed for {path}: {message}")]
    Cleanup { path: PathBuf, message: String },
}

impl PipelineError {
    /// Whether this error must abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PipelineError::RootNotFound(_)
                | PipelineError::Traversal { .. }
                | PipelineError::EncoderUnavailable { .. }
        )
    }
}

/// Convenience type alias for pngsquash results.
pub type Result<T> = std::result::Result<T, PngSquashError>;
