//! Error types for tile operations.

use thiserror::Error;

/// Error type for tile operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Kernel size is not usable.
    #[error("invalid kernel size: {0} (must be positive)")]
    InvalidKernelSize(u32),

    /// Tile does not fit inside the image.
    #[error("tile out of bounds: {0}")]
    TileOutOfBounds(String),

    /// Source and destination tiles disagree.
    #[error("tile mismatch: {0}")]
    TileMismatch(String),
}

/// Result type for tile operations.
pub type OpsResult<T> = Result<T, OpsError>;
