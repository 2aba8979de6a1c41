//! # tilefx-io
//!
//! Image I/O for the tilefx pipeline.
//!
//! - [`ppm`] - Plain-text PPM (P3) reading and writing
//! - [`generator`] - Random mosaic test images
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tilefx_io::{generate_mosaic, ppm};
//!
//! let image = generate_mosaic(16, 9, 100, Some(7))?;
//! ppm::write("input.ppm", &image)?;
//! let back = ppm::read("input.ppm")?;
//! assert_eq!(back, image);
//! # Ok::<(), tilefx_io::IoError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod generator;
pub mod ppm;

pub use error::{IoError, IoResult};
pub use generator::generate_mosaic;
