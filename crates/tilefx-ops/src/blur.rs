//! Box blur with boundary-clamped windows.
//!
//! The blur averages each pixel with its square neighborhood. A kernel of
//! size `k` uses radius `k / 2` (integer division), so sizes 1 and 2 both
//! read a single pixel column/row outward and size 1 is the identity.
//!
//! # Windowing
//!
//! Near the image edge the window is clamped to the image: positions that
//! fall outside contribute neither to the sum nor to the divisor. A corner
//! pixel with radius 1 is therefore the average of the 4 pixels that exist,
//! not of 9 with zero padding.
//!
//! # Example
//!
//! ```rust
//! use tilefx_core::{ImageBuffer, Pixel, TileGrid};
//! use tilefx_ops::box_blur_tile;
//!
//! let src = ImageBuffer::filled(4, 4, Pixel::splat(100))?;
//! let grid = TileGrid::new(4, 4, 4)?;
//! let mut dst = ImageBuffer::new(4, 4)?;
//! let mut views = dst.partition_mut(&grid)?;
//! box_blur_tile(&src, &mut views[0], 3)?;
//! assert_eq!(views[0].pixel(0, 0), Pixel::splat(100));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{OpsError, OpsResult};
use tilefx_core::{ImageBuffer, Pixel, TileViewMut};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Box-blurs one tile of `src` into `dst`.
///
/// Reads from the whole source image (windows of boundary tiles reach into
/// neighboring tiles) but writes only the pixels of `dst`'s tile. The
/// average truncates toward zero and each channel is filtered on its own.
///
/// # Errors
///
/// Returns [`OpsError::InvalidKernelSize`] if `kernel_size` is zero, or
/// [`OpsError::TileOutOfBounds`] if `dst`'s tile does not lie within `src`.
pub fn box_blur_tile(
    src: &ImageBuffer,
    dst: &mut TileViewMut<'_>,
    kernel_size: u32,
) -> OpsResult<()> {
    if kernel_size == 0 {
        return Err(OpsError::InvalidKernelSize(kernel_size));
    }
    let (width, height) = src.dimensions();
    let tile = dst.tile();
    if tile.right() > width || tile.bottom() > height {
        return Err(OpsError::TileOutOfBounds(format!(
            "{} exceeds image bounds {}x{}",
            tile, width, height
        )));
    }
    let radius = kernel_size / 2;
    trace!(%tile, kernel_size, radius, "box blur");

    for ty in 0..tile.height {
        let y = tile.y + ty;
        let y0 = y.saturating_sub(radius);
        let y1 = y.saturating_add(radius).min(height - 1);
        let out_row = dst.row_mut(ty);
        for tx in 0..tile.width {
            let x = tile.x + tx;
            let x0 = x.saturating_sub(radius);
            let x1 = x.saturating_add(radius).min(width - 1);

            let mut sum_r = 0u64;
            let mut sum_g = 0u64;
            let mut sum_b = 0u64;
            for ny in y0..=y1 {
                for p in &src.row(ny)[x0 as usize..=x1 as usize] {
                    sum_r += p.r as u64;
                    sum_g += p.g as u64;
                    sum_b += p.b as u64;
                }
            }
            // The window always contains (x, y) itself, so count >= 1.
            let count = (y1 - y0 + 1) as u64 * (x1 - x0 + 1) as u64;
            out_row[tx as usize] = Pixel::new(
                (sum_r / count) as u8,
                (sum_g / count) as u8,
                (sum_b / count) as u8,
            );
        }
    }
    Ok(())
}
