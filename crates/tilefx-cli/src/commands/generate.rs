//! Generate command
//!
//! Writes a random mosaic test image for feeding the pipeline.

use crate::GenerateArgs;
use anyhow::Result;
use tilefx_io::generate_mosaic;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: GenerateArgs, verbose: bool) -> Result<()> {
    trace!(
        output = %args.output.display(),
        tiles_x = args.tiles_x,
        tiles_y = args.tiles_y,
        scale = args.scale,
        "generate::run"
    );

    let image = generate_mosaic(args.tiles_x, args.tiles_y, args.scale, args.seed)?;
    super::save_image(&args.output, &image)?;

    if verbose {
        println!(
            "Generated {} ({}x{}, {}x{} cells)",
            args.output.display(),
            image.width(),
            image.height(),
            args.tiles_x,
            args.tiles_y
        );
    }

    Ok(())
}
