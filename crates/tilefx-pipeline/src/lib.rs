//! # tilefx-pipeline
//!
//! Concurrent two-stage tile pipeline: box blur, then channel inversion.
//!
//! The input image is partitioned into tiles. Each stage has its own worker
//! pool and its own queue of pending tiles:
//!
//! ```text
//!          blur queue              invert queue
//! tiles --> [T T T T] --> blur      [T T T]  --> invert --> output
//!                         workers ----^          workers
//! ```
//!
//! A blur worker that finishes a tile pushes that same tile onto the invert
//! queue, so a tile is only ever inverted after it has been blurred. Tiles
//! travel as pairs of disjoint mutable views into the intermediate and
//! output buffers; two workers can never write the same pixel.
//!
//! The result is identical for any worker pool sizes, including one worker
//! per stage.
//!
//! # Modules
//!
//! - [`config`] - Pipeline tuning parameters
//! - [`queue`] - Closable FIFO work queues
//! - [`task`] - Per-tile work items handed between stages
//!
//! # Example
//!
//! ```rust
//! use tilefx_core::{ImageBuffer, Pixel};
//! use tilefx_pipeline::{Pipeline, PipelineConfig};
//!
//! let input = ImageBuffer::filled(8, 8, Pixel::splat(100))?;
//! let mut pipeline = Pipeline::new(PipelineConfig::new(3, 4));
//! let output = pipeline.run(&input)?;
//! // A uniform image blurs to itself, then inverts: 255 - 100.
//! assert_eq!(output.pixel(0, 0), Pixel::splat(155));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod pipeline;
pub mod config;
pub mod queue;
pub mod task;

pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{Pipeline, PipelineState};
pub use queue::{Stage, StageQueue};
pub use task::{BlurTask, InvertTask};
