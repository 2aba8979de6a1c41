//! Pipeline tuning parameters.

use crate::error::{PipelineError, PipelineResult};
use std::thread;

/// Parameters for a pipeline run.
///
/// Worker counts of `0` mean "one worker per available CPU". Either way the
/// pool is clamped to at least one worker and at most one worker per tile.
///
/// # Example
///
/// ```rust
/// use tilefx_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::new(20, 64).with_workers(4, 2);
/// assert_eq!(config.kernel_size, 20);
/// assert_eq!(config.blur_workers, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Box blur kernel size; the blur radius is `kernel_size / 2`.
    pub kernel_size: u32,
    /// Square tile edge length in pixels.
    pub tile_size: u32,
    /// Blur worker count, `0` for automatic.
    pub blur_workers: usize,
    /// Invert worker count, `0` for automatic.
    pub invert_workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            kernel_size: 20,
            tile_size: 64,
            blur_workers: 0,
            invert_workers: 0,
        }
    }
}

impl PipelineConfig {
    /// Creates a config with the given kernel and tile sizes and automatic
    /// worker counts.
    pub fn new(kernel_size: u32, tile_size: u32) -> Self {
        Self {
            kernel_size,
            tile_size,
            ..Self::default()
        }
    }

    /// Sets explicit worker counts for both stages.
    pub fn with_workers(mut self, blur_workers: usize, invert_workers: usize) -> Self {
        self.blur_workers = blur_workers;
        self.invert_workers = invert_workers;
        self
    }

    /// Checks the parameters before any buffer is allocated or thread
    /// spawned.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] if the kernel or tile size
    /// is zero.
    pub fn validate(&self) -> PipelineResult<()> {
        if self.kernel_size == 0 {
            return Err(PipelineError::invalid_config(
                "kernel size must be positive",
            ));
        }
        if self.tile_size == 0 {
            return Err(PipelineError::invalid_config("tile size must be positive"));
        }
        Ok(())
    }
}

/// Resolves a requested worker count against the number of tiles.
///
/// `0` selects the available parallelism. More workers than tiles would
/// only idle, so the count is capped at `tile_count`.
pub(crate) fn resolve_workers(requested: usize, tile_count: usize) -> usize {
    let base = if requested == 0 {
        thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    } else {
        requested
    };
    base.max(1).min(tile_count.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.kernel_size, 20);
        assert_eq!(config.tile_size, 64);
        assert_eq!(config.blur_workers, 0);
        assert_eq!(config.invert_workers, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_kernel() {
        let err = PipelineConfig::new(0, 64).validate().unwrap_err();
        assert!(err.to_string().contains("kernel size"));
    }

    #[test]
    fn test_validate_rejects_zero_tile() {
        let err = PipelineConfig::new(20, 0).validate().unwrap_err();
        assert!(err.to_string().contains("tile size"));
    }

    #[test]
    fn test_resolve_workers_clamps_to_tiles() {
        assert_eq!(resolve_workers(8, 3), 3);
        assert_eq!(resolve_workers(2, 100), 2);
        assert_eq!(resolve_workers(1, 1), 1);
    }

    #[test]
    fn test_resolve_workers_auto_is_at_least_one() {
        assert!(resolve_workers(0, 64) >= 1);
        assert_eq!(resolve_workers(0, 1), 1);
    }
}
