//! Error types for the tile pipeline.
//!
//! Worker threads and the orchestrator share one error type so a failure in
//! any stage surfaces through [`Pipeline::run`](crate::Pipeline::run).

use crate::queue::Stage;
use thiserror::Error;

/// Pipeline error.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration rejected before any work started.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Push attempted on a queue that was already closed.
    #[error("{stage} queue is closed")]
    QueueClosed {
        /// Stage the queue feeds.
        stage: Stage,
    },

    /// A thread panicked while holding the queue lock.
    #[error("{stage} queue lock poisoned")]
    QueuePoisoned {
        /// Stage the queue feeds.
        stage: Stage,
    },

    /// A worker thread panicked.
    #[error("{stage} worker panicked")]
    WorkerPanicked {
        /// Stage the worker belonged to.
        stage: Stage,
    },

    /// Image or grid error.
    #[error("image error: {0}")]
    Core(#[from] tilefx_core::Error),

    /// Tile operation error.
    #[error("operation error: {0}")]
    Ops(#[from] tilefx_ops::OpsError),
}

impl PipelineError {
    /// Creates an [`PipelineError::InvalidConfig`] error.
    #[inline]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Creates a [`PipelineError::QueueClosed`] error.
    #[inline]
    pub fn queue_closed(stage: Stage) -> Self {
        Self::QueueClosed { stage }
    }

    /// Creates a [`PipelineError::QueuePoisoned`] error.
    #[inline]
    pub fn queue_poisoned(stage: Stage) -> Self {
        Self::QueuePoisoned { stage }
    }

    /// Creates a [`PipelineError::WorkerPanicked`] error.
    #[inline]
    pub fn worker_panicked(stage: Stage) -> Self {
        Self::WorkerPanicked { stage }
    }

    /// Returns true for errors raised by the queues themselves.
    pub fn is_queue_error(&self) -> bool {
        matches!(
            self,
            Self::QueueClosed { .. } | Self::QueuePoisoned { .. }
        )
    }
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PipelineError::queue_closed(Stage::Blur).to_string(),
            "blur queue is closed"
        );
        assert_eq!(
            PipelineError::worker_panicked(Stage::Invert).to_string(),
            "invert worker panicked"
        );
    }

    #[test]
    fn test_queue_error_predicate() {
        assert!(PipelineError::queue_closed(Stage::Blur).is_queue_error());
        assert!(PipelineError::queue_poisoned(Stage::Invert).is_queue_error());
        assert!(!PipelineError::worker_panicked(Stage::Blur).is_queue_error());
    }

    #[test]
    fn test_core_error_conversion() {
        let core_err = tilefx_core::Error::invalid_tile_size(0);
        let err: PipelineError = core_err.into();
        assert!(err.to_string().contains("invalid tile size"));
    }
}
