//! Image buffer and disjoint tile views.
//!
//! This module provides the pixel storage types:
//! - [`ImageBuffer`] - Owned, flat, row-major pixel buffer
//! - [`TileViewMut`] - Mutable borrowed view of exactly one tile
//!
//! # Memory Layout
//!
//! Buffers store pixels in **row-major** order, top-to-bottom:
//!
//! ```text
//! Memory: [P P P P P ...]  <- Row 0
//!         [P P P P P ...]  <- Row 1
//!         ...
//! index = y * width + x
//! ```
//!
//! # Views
//!
//! [`ImageBuffer::partition_mut`] splits a buffer into one [`TileViewMut`]
//! per tile of a [`TileGrid`]. Each view owns mutable slices of the rows it
//! covers and nothing else, so all views into one buffer coexist and can be
//! written concurrently from different threads. Overlapping writes are ruled
//! out by construction; there is no runtime locking on pixel data.
//!
//! ```rust
//! use tilefx_core::{ImageBuffer, Pixel, TileGrid};
//!
//! let grid = TileGrid::new(4, 4, 2)?;
//! let mut buffer = ImageBuffer::new(4, 4)?;
//! let mut views = buffer.partition_mut(&grid)?;
//! assert_eq!(views.len(), 4);
//! views[3].set_pixel(1, 1, Pixel::WHITE);   // bottom-right corner of the image
//! # Ok::<(), tilefx_core::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::pixel::Pixel;
use crate::tile::{Tile, TileGrid};

/// Owned image buffer: `width * height` pixels in row-major order.
///
/// # Example
///
/// ```rust
/// use tilefx_core::{ImageBuffer, Pixel};
///
/// let mut img = ImageBuffer::new(8, 8)?;
/// img.set_pixel(3, 4, Pixel::new(255, 0, 0));
/// assert_eq!(img.pixel(3, 4), Pixel::new(255, 0, 0));
/// assert_eq!(img.pixel(0, 0), Pixel::BLACK);
/// # Ok::<(), tilefx_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    /// Pixel data, `width * height` entries
    data: Vec<Pixel>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl ImageBuffer {
    /// Creates a new buffer filled with black pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Pixel::BLACK)
    }

    /// Creates a buffer filled with a specific pixel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `width` or `height` is zero.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "image dimensions must be positive",
            ));
        }
        Ok(Self {
            data: vec![pixel; width as usize * height as usize],
            width,
            height,
        })
    }

    /// Creates a buffer from existing pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `width` or `height` is zero
    /// or `data` does not hold exactly `width * height` pixels.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "image dimensions must be positive",
            ));
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns a reference to the raw pixel data, row-major.
    #[inline]
    pub fn data(&self) -> &[Pixel] {
        &self.data
    }

    /// Returns the pixel row at `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Pixel] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        debug_assert!(x < self.width && y < self.height);
        self.data[self.pixel_offset(x, y)]
    }

    /// Gets a pixel, returning `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        (x < self.width && y < self.height).then(|| self.pixel(x, y))
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        debug_assert!(x < self.width && y < self.height);
        let offset = self.pixel_offset(x, y);
        self.data[offset] = pixel;
    }

    /// Returns the data index for pixel at (x, y).
    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Splits the buffer into one mutable view per tile of `grid`, in the
    /// grid's row-major tile order.
    ///
    /// Every view borrows only the rows of its own tile, so the full set of
    /// views can be handed to concurrent writers. Together the views cover
    /// every pixel exactly once; a writer that fills each view it receives
    /// exactly once therefore writes each pixel exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GridMismatch`] if `grid` was built for different
    /// dimensions than this buffer.
    pub fn partition_mut(&mut self, grid: &TileGrid) -> Result<Vec<TileViewMut<'_>>> {
        if grid.width() != self.width || grid.height() != self.height {
            return Err(Error::grid_mismatch(
                (grid.width(), grid.height()),
                (self.width, self.height),
            ));
        }
        let width = self.width as usize;
        let tile_size = grid.tile_size() as usize;
        let tiles_x = grid.tiles_x() as usize;

        let mut views: Vec<TileViewMut<'_>> = grid
            .tiles()
            .map(|tile| TileViewMut {
                tile,
                rows: Vec::with_capacity(tile.height as usize),
            })
            .collect();

        for (y, row) in self.data.chunks_mut(width).enumerate() {
            let ty = y / tile_size;
            for (tx, segment) in row.chunks_mut(tile_size).enumerate() {
                views[ty * tiles_x + tx].rows.push(segment);
            }
        }
        Ok(views)
    }
}

/// Mutable view of exactly one tile's pixels inside an [`ImageBuffer`].
///
/// Produced by [`ImageBuffer::partition_mut`]; cannot alias any other view
/// from the same call. Pixel coordinates on this type are **relative to the
/// tile origin**; [`tile`](TileViewMut::tile) gives the absolute placement.
pub struct TileViewMut<'a> {
    tile: Tile,
    /// One mutable slice per covered row, each `tile.width` long
    rows: Vec<&'a mut [Pixel]>,
}

impl TileViewMut<'_> {
    /// Returns the tile this view covers, in absolute image coordinates.
    #[inline]
    pub fn tile(&self) -> Tile {
        self.tile
    }

    /// Returns the view width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.tile.width
    }

    /// Returns the view height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.tile.height
    }

    /// Returns the view row at `y` (relative to the tile origin).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Pixel] {
        &self.rows[y as usize]
    }

    /// Returns the mutable view row at `y` (relative to the tile origin).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [Pixel] {
        &mut self.rows[y as usize]
    }

    /// Returns the pixel at (x, y) relative to the tile origin.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the view.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        debug_assert!(x < self.tile.width && y < self.tile.height);
        self.rows[y as usize][x as usize]
    }

    /// Sets the pixel at (x, y) relative to the tile origin.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the view.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        debug_assert!(x < self.tile.width && y < self.tile.height);
        self.rows[y as usize][x as usize] = pixel;
    }

    /// Fills the entire view with a pixel value.
    pub fn fill(&mut self, pixel: Pixel) {
        for row in &mut self.rows {
            row.fill(pixel);
        }
    }
}

impl std::fmt::Debug for TileViewMut<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileViewMut").field("tile", &self.tile).finish()
    }
}
