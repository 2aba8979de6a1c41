//! # tilefx-core
//!
//! Core types for tiled image processing.
//!
//! This crate provides the foundational types used throughout the tilefx
//! workspace:
//!
//! - [`Pixel`] - 8-bit RGB pixel
//! - [`ImageBuffer`] - Flat, row-major pixel buffer
//! - [`Tile`], [`TileGrid`] - Tile geometry and the fixed-origin grid partitioner
//! - [`TileViewMut`] - Disjoint mutable view of one tile inside a buffer
//!
//! ## Design Philosophy
//!
//! The central idea is **structural non-overlap**: instead of handing workers
//! a shared buffer and trusting them to stay inside their tile, a buffer is
//! partitioned up front into one [`TileViewMut`] per tile. The views are
//! built from disjoint row slices, so any number of them can be held (and
//! written) at the same time, and the borrow checker proves the absence of
//! overlapping writes:
//!
//! ```rust
//! use tilefx_core::{ImageBuffer, Pixel, TileGrid};
//!
//! let grid = TileGrid::new(64, 64, 16)?;
//! let mut buffer = ImageBuffer::new(64, 64)?;
//!
//! // One independent mutable view per tile, all alive at once.
//! let mut views = buffer.partition_mut(&grid)?;
//! for view in &mut views {
//!     view.fill(Pixel::WHITE);
//! }
//! # Ok::<(), tilefx_core::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This crate is the foundation of tilefx and has no internal dependencies.
//! All other tilefx crates depend on `tilefx-core`:
//!
//! ```text
//! tilefx-core (this crate)
//!    ^
//!    |
//!    +-- tilefx-ops (per-tile pixel operations)
//!    +-- tilefx-pipeline (stage queues, worker pools, orchestrator)
//!    +-- tilefx-io (PPM I/O, mosaic generator)
//!    +-- tilefx-cli (command-line tool)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;
pub mod tile;

// Re-exports for convenience
pub use error::*;
pub use image::*;
pub use pixel::*;
pub use tile::*;
