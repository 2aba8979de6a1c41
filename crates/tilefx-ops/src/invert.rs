//! Per-channel inversion.
//!
//! Maps every channel of every pixel to its complement, `255 - value`.
//! Applying the operation twice restores the original pixels.

use crate::{OpsError, OpsResult};
use tilefx_core::TileViewMut;

/// Inverts one tile, reading `src` and writing `dst`.
///
/// Both views must cover the same tile; the source normally comes from the
/// blurred image and the destination from the output image.
///
/// # Errors
///
/// Returns [`OpsError::TileMismatch`] if the views cover different tiles.
pub fn invert_tile(src: &TileViewMut<'_>, dst: &mut TileViewMut<'_>) -> OpsResult<()> {
    if src.tile() != dst.tile() {
        return Err(OpsError::TileMismatch(format!(
            "source {} vs destination {}",
            src.tile(),
            dst.tile()
        )));
    }
    for y in 0..src.height() {
        for (out, p) in dst.row_mut(y).iter_mut().zip(src.row(y)) {
            *out = p.inverted();
        }
    }
    Ok(())
}
