//! Pipeline orchestration: buffers, worker pools, and the run state
//! machine.
//!
//! [`Pipeline::run`] drives one image through both stages:
//!
//! 1. Partition the intermediate and output buffers into per-tile views.
//! 2. Spawn the blur and invert pools as scoped threads.
//! 3. Enqueue every tile as a [`BlurTask`], then close the blur queue.
//! 4. Join the blur pool; every tile has now been forwarded.
//! 5. Close the invert queue, join the invert pool.
//!
//! Workers hold only disjoint views, so the stages need no pixel-level
//! locking; the queues are the only shared state.

use crate::config::{PipelineConfig, resolve_workers};
use crate::error::{PipelineError, PipelineResult};
use crate::queue::{Stage, StageQueue};
use crate::task::{BlurTask, InvertTask};
use std::fmt;
use std::thread::{self, ScopedJoinHandle};
use tilefx_core::{ImageBuffer, TileGrid};
use tilefx_ops::{box_blur_tile, invert_tile};
use tracing::{debug, info, trace};

/// Phase of a pipeline run.
///
/// States advance monotonically from `Idle` to `Done`; a failed run stops
/// partway and keeps the state it reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    /// No run started yet.
    #[default]
    Idle,
    /// Blur queue is being filled and consumed.
    BlurRunning,
    /// Blur queue closed; waiting for blur workers to finish.
    BlurDraining,
    /// Blur pool joined; invert workers consume remaining tasks.
    InvertRunning,
    /// Invert queue closed; waiting for invert workers to finish.
    InvertDraining,
    /// Run finished, output complete.
    Done,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::BlurRunning => "blur-running",
            Self::BlurDraining => "blur-draining",
            Self::InvertRunning => "invert-running",
            Self::InvertDraining => "invert-draining",
            Self::Done => "done",
        };
        write!(f, "{name}")
    }
}

/// Two-stage tile pipeline.
///
/// See the [crate docs](crate) for the full data flow. A `Pipeline` is
/// cheap to create and can be reused for multiple runs with the same
/// configuration.
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    state: PipelineState,
}

impl Pipeline {
    /// Creates an idle pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            state: PipelineState::Idle,
        }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Returns the current run state.
    #[inline]
    pub fn state(&self) -> PipelineState {
        self.state
    }

    fn set_state(&mut self, next: PipelineState) {
        debug!(from = %self.state, to = %next, "pipeline state");
        self.state = next;
    }

    /// Blurs and inverts `input`, returning the finished output buffer.
    ///
    /// The input is only read; intermediate and output buffers are
    /// allocated here. The output is identical for any worker counts.
    ///
    /// # Errors
    ///
    /// Configuration and dimension errors are returned before any buffer
    /// is allocated or thread spawned. A worker failure surfaces as that
    /// worker's error, or as [`PipelineError::WorkerPanicked`].
    pub fn run(&mut self, input: &ImageBuffer) -> PipelineResult<ImageBuffer> {
        self.config.validate()?;
        let (width, height) = input.dimensions();
        let grid = TileGrid::new(width, height, self.config.tile_size)?;
        let tile_count = grid.len();
        let blur_workers = resolve_workers(self.config.blur_workers, tile_count);
        let invert_workers = resolve_workers(self.config.invert_workers, tile_count);
        info!(
            width,
            height,
            tiles = tile_count,
            blur_workers,
            invert_workers,
            kernel_size = self.config.kernel_size,
            "pipeline start"
        );

        let mut blurred = ImageBuffer::new(width, height)?;
        let mut output = ImageBuffer::new(width, height)?;
        {
            let blurred_views = blurred.partition_mut(&grid)?;
            let output_views = output.partition_mut(&grid)?;
            let tasks: Vec<BlurTask<'_>> = blurred_views
                .into_iter()
                .zip(output_views)
                .map(|(blurred, output)| BlurTask::new(blurred, output))
                .collect();

            let blur_queue = StageQueue::new(Stage::Blur);
            let invert_queue = StageQueue::new(Stage::Invert);
            let kernel_size = self.config.kernel_size;

            thread::scope(|scope| -> PipelineResult<()> {
                let mut blur_pool = Vec::with_capacity(blur_workers);
                for worker in 0..blur_workers {
                    let blur_queue = &blur_queue;
                    let invert_queue = &invert_queue;
                    blur_pool.push(scope.spawn(move || {
                        blur_worker(worker, input, kernel_size, blur_queue, invert_queue)
                    }));
                }
                let mut invert_pool = Vec::with_capacity(invert_workers);
                for worker in 0..invert_workers {
                    let invert_queue = &invert_queue;
                    invert_pool.push(scope.spawn(move || invert_worker(worker, invert_queue)));
                }

                let result = self.drive(tasks, &blur_queue, &invert_queue, blur_pool, invert_pool);
                if result.is_err() {
                    // Unblock every worker so the scope can join them.
                    let _ = blur_queue.close();
                    let _ = invert_queue.close();
                }
                result
            })?;
        }
        self.set_state(PipelineState::Done);
        info!("pipeline done");
        Ok(output)
    }

    /// Runs the feed/close/join sequence on the current thread while the
    /// pools work.
    fn drive<'env, 'scope>(
        &mut self,
        tasks: Vec<BlurTask<'env>>,
        blur_queue: &StageQueue<BlurTask<'env>>,
        invert_queue: &StageQueue<InvertTask<'env>>,
        blur_pool: Vec<ScopedJoinHandle<'scope, PipelineResult<()>>>,
        invert_pool: Vec<ScopedJoinHandle<'scope, PipelineResult<()>>>,
    ) -> PipelineResult<()> {
        self.set_state(PipelineState::BlurRunning);
        for task in tasks {
            blur_queue.push(task)?;
        }
        // No further blur work will ever arrive.
        blur_queue.close()?;

        self.set_state(PipelineState::BlurDraining);
        join_pool(Stage::Blur, blur_pool)?;

        // Every tile passed through blur, so every invert task is queued.
        self.set_state(PipelineState::InvertRunning);
        invert_queue.close()?;

        self.set_state(PipelineState::InvertDraining);
        join_pool(Stage::Invert, invert_pool)?;
        Ok(())
    }
}

/// Joins a worker pool, surfacing the first worker error or panic.
fn join_pool(
    stage: Stage,
    pool: Vec<ScopedJoinHandle<'_, PipelineResult<()>>>,
) -> PipelineResult<()> {
    for handle in pool {
        handle
            .join()
            .map_err(|_| PipelineError::worker_panicked(stage))??;
    }
    Ok(())
}

/// Blur stage worker loop: pop a tile, blur it, forward it to invert.
fn blur_worker<'env>(
    worker: usize,
    input: &ImageBuffer,
    kernel_size: u32,
    blur_queue: &StageQueue<BlurTask<'env>>,
    invert_queue: &StageQueue<InvertTask<'env>>,
) -> PipelineResult<()> {
    let mut processed = 0usize;
    while let Some(task) = blur_queue.pop_blocking()? {
        let BlurTask { mut blurred, output } = task;
        trace!(worker, tile = %blurred.tile(), "blur tile");
        box_blur_tile(input, &mut blurred, kernel_size)?;
        invert_queue.push(InvertTask::new(blurred, output))?;
        processed += 1;
    }
    debug!(worker, processed, "blur worker done");
    Ok(())
}

/// Invert stage worker loop: pop a blurred tile, invert it into the
/// output view.
fn invert_worker(worker: usize, invert_queue: &StageQueue<InvertTask<'_>>) -> PipelineResult<()> {
    let mut processed = 0usize;
    while let Some(task) = invert_queue.pop_blocking()? {
        let InvertTask { blurred, mut output } = task;
        trace!(worker, tile = %blurred.tile(), "invert tile");
        invert_tile(&blurred, &mut output)?;
        processed += 1;
    }
    debug!(worker, processed, "invert worker done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilefx_core::Pixel;

    /// Deterministic non-uniform test image.
    fn test_image(width: u32, height: u32) -> ImageBuffer {
        let mut img = ImageBuffer::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                let v = (x * 7 + y * 13) % 251;
                img.set_pixel(
                    x,
                    y,
                    Pixel::new(v as u8, (v * 3 % 256) as u8, (255 - v) as u8),
                );
            }
        }
        img
    }

    /// Single-threaded oracle: blur the whole image, then invert it.
    fn reference(input: &ImageBuffer, kernel_size: u32) -> ImageBuffer {
        let (width, height) = input.dimensions();
        let grid = TileGrid::new(width, height, width.max(height)).unwrap();
        let mut blurred = ImageBuffer::new(width, height).unwrap();
        let mut output = ImageBuffer::new(width, height).unwrap();
        {
            let mut views = blurred.partition_mut(&grid).unwrap();
            box_blur_tile(input, &mut views[0], kernel_size).unwrap();
        }
        {
            let src_views = blurred.partition_mut(&grid).unwrap();
            let mut dst_views = output.partition_mut(&grid).unwrap();
            invert_tile(&src_views[0], &mut dst_views[0]).unwrap();
        }
        output
    }

    #[test]
    fn test_single_pixel_kernel_one() {
        let input = ImageBuffer::filled(1, 1, Pixel::new(10, 20, 30)).unwrap();
        let mut pipeline = Pipeline::new(PipelineConfig::new(1, 64));
        let output = pipeline.run(&input).unwrap();
        // Radius 0 blur is the identity, so only the inversion shows.
        assert_eq!(output.pixel(0, 0), Pixel::new(245, 235, 225));
    }

    #[test]
    fn test_black_input_becomes_white() {
        let input = ImageBuffer::new(4, 4).unwrap();
        let mut pipeline = Pipeline::new(PipelineConfig::new(1, 2));
        let output = pipeline.run(&input).unwrap();
        assert!(output.data().iter().all(|&p| p == Pixel::WHITE));
    }

    #[test]
    fn test_matches_sequential_reference() {
        let input = test_image(20, 14);
        let expected = reference(&input, 5);
        let mut pipeline = Pipeline::new(PipelineConfig::new(5, 4).with_workers(3, 2));
        let output = pipeline.run(&input).unwrap();
        assert_eq!(output, expected);
    }

    #[test]
    fn test_output_independent_of_worker_counts() {
        let input = test_image(16, 12);
        let mut outputs = Vec::new();
        for workers in [1, 2, 4, 8] {
            let mut pipeline =
                Pipeline::new(PipelineConfig::new(5, 4).with_workers(workers, workers));
            outputs.push(pipeline.run(&input).unwrap());
        }
        for output in &outputs[1..] {
            assert_eq!(*output, outputs[0]);
        }
    }

    #[test]
    fn test_single_worker_per_stage_completes() {
        // One worker per stage with several tiles in flight must not
        // deadlock: the blur queue is closed by the orchestrator, not by
        // the workers.
        let input = test_image(8, 8);
        let mut pipeline = Pipeline::new(PipelineConfig::new(3, 2).with_workers(1, 1));
        let output = pipeline.run(&input).unwrap();
        assert_eq!(pipeline.state(), PipelineState::Done);
        assert_eq!(output, reference(&input, 3));
    }

    #[test]
    fn test_state_starts_idle_and_ends_done() {
        let pipeline = Pipeline::new(PipelineConfig::default());
        assert_eq!(pipeline.state(), PipelineState::Idle);

        let input = test_image(4, 4);
        let mut pipeline = Pipeline::new(PipelineConfig::new(1, 2));
        pipeline.run(&input).unwrap();
        assert_eq!(pipeline.state(), PipelineState::Done);
    }

    #[test]
    fn test_invalid_config_fails_before_running() {
        let input = test_image(4, 4);

        let mut pipeline = Pipeline::new(PipelineConfig::new(0, 2));
        let err = pipeline.run(&input).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidConfig(_)));
        assert_eq!(pipeline.state(), PipelineState::Idle);

        let mut pipeline = Pipeline::new(PipelineConfig::new(1, 0));
        let err = pipeline.run(&input).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidConfig(_)));
        assert_eq!(pipeline.state(), PipelineState::Idle);
    }

    #[test]
    fn test_blur_reaches_across_tile_boundaries() {
        // A white pixel in one tile must bleed into the neighboring tile:
        // blur reads the source image, not just its own tile.
        let mut input = ImageBuffer::new(8, 4).unwrap();
        input.set_pixel(3, 0, Pixel::WHITE);
        let mut pipeline = Pipeline::new(PipelineConfig::new(3, 4));
        let output = pipeline.run(&input).unwrap();

        // Pixel (4, 0) sits in the second tile; its window spans the seam
        // and contains the white pixel: 255 / 6 = 42, inverted 213.
        assert_eq!(output.pixel(4, 0), Pixel::splat(213));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(PipelineState::Idle.to_string(), "idle");
        assert_eq!(PipelineState::BlurDraining.to_string(), "blur-draining");
        assert_eq!(PipelineState::Done.to_string(), "done");
    }
}
