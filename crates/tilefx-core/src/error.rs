//! Error types for tilefx-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the precondition failures this crate can detect:
//!
//! - Invalid image or grid dimensions (zero width/height)
//! - Invalid tile edge length (zero)
//! - Partitioning a buffer against a grid built for different dimensions
//!
//! All of these are caught before any pixel data is touched, so a failed
//! constructor never leaves a half-built value behind.
//!
//! # Usage
//!
//! ```rust
//! use tilefx_core::{Error, TileGrid};
//!
//! let err = TileGrid::new(100, 50, 0).unwrap_err();
//! assert!(matches!(err, Error::InvalidTileSize { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::image::ImageBuffer`] - Construction and partitioning
//! - [`crate::tile::TileGrid`] - Grid validation
//! - `tilefx-pipeline` - Converted into its pipeline error

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building buffers and tile grids.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid image dimensions.
    ///
    /// Returned when width or height is zero, or when a pixel vector does
    /// not match the dimensions it was paired with.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why the dimensions are invalid
        reason: String,
    },

    /// Invalid tile edge length.
    ///
    /// A grid with tile edge zero would never cover a single pixel.
    #[error("invalid tile size: {size} (must be positive)")]
    InvalidTileSize {
        /// Requested tile edge length
        size: u32,
    },

    /// A buffer was partitioned against a grid built for other dimensions.
    ///
    /// Returned by [`crate::image::ImageBuffer::partition_mut`] when the
    /// grid and buffer disagree on image size.
    #[error("grid covers {grid_width}x{grid_height} but buffer is {width}x{height}")]
    GridMismatch {
        /// Width the grid was built for
        grid_width: u32,
        /// Height the grid was built for
        grid_height: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidTileSize`] error.
    #[inline]
    pub fn invalid_tile_size(size: u32) -> Self {
        Self::InvalidTileSize { size }
    }

    /// Creates an [`Error::GridMismatch`] error.
    #[inline]
    pub fn grid_mismatch(grid: (u32, u32), buffer: (u32, u32)) -> Self {
        Self::GridMismatch {
            grid_width: grid.0,
            grid_height: grid.1,
            width: buffer.0,
            height: buffer.1,
        }
    }

    /// Returns `true` if this is a dimension-related error.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. } | Self::GridMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(0, 1080, "width must be positive");
        let msg = err.to_string();
        assert!(msg.contains("0x1080"));
        assert!(msg.contains("width must be positive"));
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_invalid_tile_size() {
        let err = Error::invalid_tile_size(0);
        assert!(err.to_string().contains("must be positive"));
        assert!(!err.is_dimension_error());
    }

    #[test]
    fn test_grid_mismatch() {
        let err = Error::grid_mismatch((100, 50), (200, 50));
        let msg = err.to_string();
        assert!(msg.contains("100x50"));
        assert!(msg.contains("200x50"));
        assert!(err.is_dimension_error());
    }
}
