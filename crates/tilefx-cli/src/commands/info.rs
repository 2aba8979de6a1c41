//! Info command
//!
//! Prints image dimensions and the tile layout for a given tile size.

use crate::InfoArgs;
use anyhow::Result;
use tilefx_core::TileGrid;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    trace!(inputs = args.input.len(), tile = args.tile, "info::run");

    for path in &args.input {
        let image = super::load_image(path)?;
        let (width, height) = image.dimensions();
        let grid = TileGrid::new(width, height, args.tile)?;
        println!(
            "{}: {}x{}, {} tiles of {}px ({}x{})",
            path.display(),
            width,
            height,
            grid.len(),
            args.tile,
            grid.tiles_x(),
            grid.tiles_y()
        );
        if verbose {
            let bytes = std::fs::metadata(path)?.len();
            println!(
                "  {} pixels, {} on disk",
                image.pixel_count(),
                super::format_size(bytes)
            );
        }
    }

    Ok(())
}
