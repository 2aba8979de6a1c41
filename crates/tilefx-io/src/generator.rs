//! Random mosaic test images.
//!
//! A mosaic is a grid of solid-colored square cells, which makes both
//! pipeline stages easy to eyeball: blur softens the cell borders and
//! inversion flips the palette. With a fixed seed the image is fully
//! reproducible.

use crate::error::{IoError, IoResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tilefx_core::{ImageBuffer, Pixel};
use tracing::debug;

/// Generates a mosaic of `tiles_x` x `tiles_y` random solid-colored cells,
/// each `scale` pixels square.
///
/// The resulting image is `tiles_x * scale` by `tiles_y * scale` pixels.
/// With `seed` set, the same arguments always produce the same image;
/// without it the colors come from the OS entropy source.
///
/// # Example
///
/// ```rust
/// use tilefx_io::generate_mosaic;
///
/// let image = generate_mosaic(16, 9, 10, Some(7))?;
/// assert_eq!(image.dimensions(), (160, 90));
/// # Ok::<(), tilefx_io::IoError>(())
/// ```
///
/// # Errors
///
/// Returns [`IoError::InvalidDimensions`] if any argument is zero or the
/// resulting dimensions overflow.
pub fn generate_mosaic(
    tiles_x: u32,
    tiles_y: u32,
    scale: u32,
    seed: Option<u64>,
) -> IoResult<ImageBuffer> {
    if tiles_x == 0 || tiles_y == 0 || scale == 0 {
        return Err(IoError::InvalidDimensions(
            "mosaic cells and scale must be positive".into(),
        ));
    }
    let width = tiles_x.checked_mul(scale).ok_or_else(|| {
        IoError::InvalidDimensions(format!("{tiles_x} cells of {scale}px overflow the width"))
    })?;
    let height = tiles_y.checked_mul(scale).ok_or_else(|| {
        IoError::InvalidDimensions(format!("{tiles_y} cells of {scale}px overflow the height"))
    })?;
    let mut image =
        ImageBuffer::new(width, height).map_err(|e| IoError::InvalidDimensions(e.to_string()))?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    for cy in 0..tiles_y {
        for cx in 0..tiles_x {
            let color = Pixel::new(rng.random(), rng.random(), rng.random());
            for y in cy * scale..(cy + 1) * scale {
                for x in cx * scale..(cx + 1) * scale {
                    image.set_pixel(x, y, color);
                }
            }
        }
    }
    debug!(width, height, seeded = seed.is_some(), "generated mosaic");
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mosaic_dimensions() {
        let image = generate_mosaic(16, 9, 10, Some(1)).unwrap();
        assert_eq!(image.dimensions(), (160, 90));
    }

    #[test]
    fn test_seeded_mosaic_is_reproducible() {
        let a = generate_mosaic(4, 3, 5, Some(42)).unwrap();
        let b = generate_mosaic(4, 3, 5, Some(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cells_are_uniform() {
        let image = generate_mosaic(3, 2, 4, Some(9)).unwrap();
        for cy in 0..2u32 {
            for cx in 0..3u32 {
                let corner = image.pixel(cx * 4, cy * 4);
                for y in cy * 4..(cy + 1) * 4 {
                    for x in cx * 4..(cx + 1) * 4 {
                        assert_eq!(image.pixel(x, y), corner);
                    }
                }
            }
        }
    }

    #[test]
    fn test_unseeded_mosaic_generates() {
        let image = generate_mosaic(2, 2, 2, None).unwrap();
        assert_eq!(image.dimensions(), (4, 4));
    }

    #[test]
    fn test_rejects_zero_arguments() {
        for (tx, ty, scale) in [(0, 1, 1), (1, 0, 1), (1, 1, 0)] {
            assert!(matches!(
                generate_mosaic(tx, ty, scale, Some(1)).unwrap_err(),
                IoError::InvalidDimensions(_)
            ));
        }
    }

    #[test]
    fn test_rejects_dimension_overflow() {
        assert!(matches!(
            generate_mosaic(u32::MAX, 1, 2, Some(1)).unwrap_err(),
            IoError::InvalidDimensions(_)
        ));
    }
}
