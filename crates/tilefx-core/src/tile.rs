//! Tile geometry and the fixed-origin grid partitioner.
//!
//! # Overview
//!
//! - [`Tile`] - A rectangular sub-region of an image, one unit of work
//! - [`TileGrid`] - The partition of an image into non-overlapping tiles
//!
//! # Coordinate System
//!
//! All coordinates use the standard image convention:
//! - Origin (0, 0) is at the **top-left** corner
//! - X increases to the right
//! - Y increases downward
//!
//! # Partitioning
//!
//! The grid starts at (0, 0) and steps by the tile edge length in both axes.
//! Tiles on the right and bottom borders are clipped to the image bounds, so
//! the grid is a true partition: every pixel belongs to exactly one tile.
//!
//! ```text
//! 100x50 image, tile edge 30:
//!
//! +------+------+------+---+
//! | 30x30| 30x30| 30x30|10 |
//! +------+------+------+---+
//! | 30x20| 30x20| 30x20|...|   4 x 2 = 8 tiles
//! +------+------+------+---+
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tilefx_core::TileGrid;
//!
//! let grid = TileGrid::new(100, 50, 30)?;
//! assert_eq!(grid.tiles_x(), 4);
//! assert_eq!(grid.tiles_y(), 2);
//! assert_eq!(grid.len(), 8);
//!
//! let last = grid.tiles().last().unwrap();
//! assert_eq!((last.width, last.height), (10, 20));
//! # Ok::<(), tilefx_core::Error>(())
//! ```

use crate::error::{Error, Result};

/// A rectangular sub-region of an image assigned as one unit of work.
///
/// Covers the half-open ranges `x..x+width` and `y..y+height`; the left/top
/// edges are inclusive, the right/bottom edges exclusive.
///
/// # Example
///
/// ```rust
/// use tilefx_core::Tile;
///
/// let tile = Tile::new(60, 30, 10, 20);
/// assert_eq!(tile.right(), 70);
/// assert_eq!(tile.bottom(), 50);
/// assert_eq!(tile.area(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Tile {
    /// X coordinate of the left edge (inclusive)
    pub x: u32,
    /// Y coordinate of the top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Tile {
    /// Creates a new tile with the given origin and dimensions.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the X coordinate of the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the Y coordinate of the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns the area of the tile in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the point (px, py) lies inside this tile.
    #[inline]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns `true` if this tile shares at least one pixel with another.
    #[inline]
    pub const fn overlaps(&self, other: &Tile) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns an iterator over all absolute (x, y) coordinates in this tile.
    ///
    /// Iterates row by row, left to right, top to bottom.
    #[inline]
    pub fn iter_coords(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tile({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// The fixed-origin tile grid over an image.
///
/// Produced tiles cover every pixel index exactly once: full coverage, no
/// overlap. Tiles in the last column/row are clipped to the image bounds.
///
/// # Errors
///
/// Construction fails fast when width, height, or the tile edge length is
/// zero; no grid value with a degenerate configuration can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tile_size: u32,
    tiles_x: u32,
    tiles_y: u32,
}

impl TileGrid {
    /// Creates the grid for an image of `width` x `height` pixels with the
    /// given tile edge length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `width` or `height` is zero,
    /// and [`Error::InvalidTileSize`] if `tile_size` is zero.
    pub fn new(width: u32, height: u32, tile_size: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "image dimensions must be positive",
            ));
        }
        if tile_size == 0 {
            return Err(Error::invalid_tile_size(tile_size));
        }
        Ok(Self {
            width,
            height,
            tile_size,
            tiles_x: width.div_ceil(tile_size),
            tiles_y: height.div_ceil(tile_size),
        })
    }

    /// Returns the image width this grid was built for.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height this grid was built for.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the tile edge length.
    #[inline]
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Returns the number of tile columns.
    #[inline]
    pub const fn tiles_x(&self) -> u32 {
        self.tiles_x
    }

    /// Returns the number of tile rows.
    #[inline]
    pub const fn tiles_y(&self) -> u32 {
        self.tiles_y
    }

    /// Returns the total number of tiles.
    #[inline]
    pub const fn len(&self) -> usize {
        self.tiles_x as usize * self.tiles_y as usize
    }

    /// Returns `true` if the grid holds no tiles.
    ///
    /// Never true for a constructed grid; dimensions are validated to be
    /// positive, which forces at least one tile.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the tile at grid position (tx, ty), or `None` if out of range.
    #[inline]
    pub fn tile(&self, tx: u32, ty: u32) -> Option<Tile> {
        (tx < self.tiles_x && ty < self.tiles_y).then(|| self.tile_at(tx, ty))
    }

    /// Returns an iterator over all tiles in row-major order: left to right,
    /// top to bottom.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.tiles_y)
            .flat_map(move |ty| (0..self.tiles_x).map(move |tx| self.tile_at(tx, ty)))
    }

    /// Tile at (tx, ty); callers guarantee the position is in range.
    fn tile_at(&self, tx: u32, ty: u32) -> Tile {
        let x = tx * self.tile_size;
        let y = ty * self.tile_size;
        Tile::new(
            x,
            y,
            (self.width - x).min(self.tile_size),
            (self.height - y).min(self.tile_size),
        )
    }
}

impl std::fmt::Display for TileGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TileGrid({}x{}, edge {}, {}x{} tiles)",
            self.width, self.height, self.tile_size, self.tiles_x, self.tiles_y
        )
    }
}
