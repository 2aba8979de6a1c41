//! Process command
//!
//! Runs an image through the blur + invert tile pipeline.

use crate::ProcessArgs;
use anyhow::Result;
use std::time::Instant;
use tilefx_pipeline::{Pipeline, PipelineConfig};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: ProcessArgs, verbose: bool, threads: usize) -> Result<()> {
    trace!(input = %args.input.display(), kernel = args.kernel, tile = args.tile, "process::run");

    let image = super::load_image(&args.input)?;
    let (width, height) = image.dimensions();

    if verbose {
        println!(
            "Processing {} ({}x{}, kernel={}, tile={})",
            args.input.display(),
            width,
            height,
            args.kernel,
            args.tile
        );
    }

    let config = PipelineConfig::new(args.kernel, args.tile).with_workers(threads, threads);
    let mut pipeline = Pipeline::new(config);
    let start = Instant::now();
    let output = pipeline.run(&image)?;
    let elapsed = start.elapsed();
    info!(elapsed_ms = elapsed.as_millis() as u64, "pipeline finished");

    super::save_image(&args.output, &output)?;

    if verbose {
        println!(
            "Wrote {} ({:.2}s)",
            args.output.display(),
            elapsed.as_secs_f64()
        );
    }

    Ok(())
}
