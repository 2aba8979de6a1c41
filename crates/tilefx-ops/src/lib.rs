//! # tilefx-ops
//!
//! Per-tile image operations for the tilefx pipeline.
//!
//! Each operation reads whatever it needs but writes only through a single
//! [`TileViewMut`](tilefx_core::TileViewMut), so independent tiles can be
//! processed from different threads without coordination.
//!
//! # Modules
//!
//! - [`blur`] - Box blur with boundary-clamped windows
//! - [`invert`] - Per-channel inversion
//!
//! # Example
//!
//! ```rust
//! use tilefx_core::{ImageBuffer, TileGrid};
//! use tilefx_ops::box_blur_tile;
//!
//! let src = ImageBuffer::new(16, 16)?;
//! let grid = TileGrid::new(16, 16, 8)?;
//! let mut dst = ImageBuffer::new(16, 16)?;
//! for view in &mut dst.partition_mut(&grid)? {
//!     box_blur_tile(&src, view, 3)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod blur;
pub mod invert;

pub use blur::box_blur_tile;
pub use error::{OpsError, OpsResult};
pub use invert::invert_tile;
