//! Per-tile work items handed between stages.
//!
//! A tile enters the pipeline as a [`BlurTask`] carrying the destination
//! views for *both* stages: the tile's slice of the intermediate (blurred)
//! buffer and of the final output buffer. The blur worker fills the blurred
//! view, then moves both views on as an [`InvertTask`].
//!
//! Because the views travel inside the task, a tile cannot reach the invert
//! queue before its blur finished, and no two tasks ever hold views of the
//! same pixels.

use tilefx_core::{Tile, TileViewMut};

/// Work item for the blur stage.
#[derive(Debug)]
pub struct BlurTask<'a> {
    /// Destination view in the intermediate buffer, filled by the blur.
    pub blurred: TileViewMut<'a>,
    /// Destination view in the output buffer, carried through for the
    /// invert stage.
    pub output: TileViewMut<'a>,
}

impl<'a> BlurTask<'a> {
    /// Creates a blur task from the tile's two destination views.
    ///
    /// Both views must cover the same tile.
    pub fn new(blurred: TileViewMut<'a>, output: TileViewMut<'a>) -> Self {
        debug_assert_eq!(blurred.tile(), output.tile());
        Self { blurred, output }
    }

    /// Returns the tile this task covers.
    #[inline]
    pub fn tile(&self) -> Tile {
        self.blurred.tile()
    }
}

/// Work item for the invert stage, produced by a blur worker.
#[derive(Debug)]
pub struct InvertTask<'a> {
    /// The tile's blurred pixels, now the source.
    pub blurred: TileViewMut<'a>,
    /// Destination view in the output buffer.
    pub output: TileViewMut<'a>,
}

impl<'a> InvertTask<'a> {
    /// Creates an invert task from a blurred source view and its output
    /// view.
    ///
    /// Both views must cover the same tile.
    pub fn new(blurred: TileViewMut<'a>, output: TileViewMut<'a>) -> Self {
        debug_assert_eq!(blurred.tile(), output.tile());
        Self { blurred, output }
    }

    /// Returns the tile this task covers.
    #[inline]
    pub fn tile(&self) -> Tile {
        self.blurred.tile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilefx_core::{ImageBuffer, TileGrid};

    #[test]
    fn test_tasks_carry_tile_through_stages() {
        let grid = TileGrid::new(8, 8, 4).unwrap();
        let mut blurred = ImageBuffer::new(8, 8).unwrap();
        let mut output = ImageBuffer::new(8, 8).unwrap();

        let blurred_views = blurred.partition_mut(&grid).unwrap();
        let output_views = output.partition_mut(&grid).unwrap();
        let tasks: Vec<BlurTask<'_>> = blurred_views
            .into_iter()
            .zip(output_views)
            .map(|(b, o)| BlurTask::new(b, o))
            .collect();

        assert_eq!(tasks.len(), grid.len());
        for (task, tile) in tasks.into_iter().zip(grid.tiles()) {
            assert_eq!(task.tile(), tile);
            let next = InvertTask::new(task.blurred, task.output);
            assert_eq!(next.tile(), tile);
        }
    }
}
