//! Error types for image I/O.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Unsupported bit depth.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Invalid or corrupted file.
    #[error("invalid file: {0}")]
    InvalidFile(String),

    /// Numeric field failed to parse.
    #[error("parse error: {0}")]
    Parse(String),

    /// Requested image dimensions are unusable.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
