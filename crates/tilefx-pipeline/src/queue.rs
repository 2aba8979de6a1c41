//! Closable FIFO work queues.
//!
//! Each pipeline stage pulls work from its own [`StageQueue`]. The queue is
//! unbounded, so producers never block; consumers block in
//! [`pop_blocking`](StageQueue::pop_blocking) until an item arrives or the
//! queue is closed.
//!
//! # Shutdown protocol
//!
//! [`close`](StageQueue::close) marks the end of the work stream. Items
//! already queued remain poppable; once the queue is both closed and empty,
//! `pop_blocking` returns `Ok(None)` and consumers exit their loop. Closing
//! wakes every blocked consumer, and pushing after close is an error. Close
//! is idempotent.

use crate::error::{PipelineError, PipelineResult};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Condvar, Mutex};

/// Pipeline stage identifier, used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Box blur stage.
    Blur,
    /// Channel inversion stage.
    Invert,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blur => write!(f, "blur"),
            Self::Invert => write!(f, "invert"),
        }
    }
}

/// Queue contents and the closed flag, updated together under one lock so
/// consumers always observe a consistent pair.
struct QueueState<T> {
    items: VecDeque<T>,
    closed: bool,
}

/// Unbounded multi-producer multi-consumer FIFO queue with explicit close.
///
/// # Example
///
/// ```rust
/// use tilefx_pipeline::{Stage, StageQueue};
///
/// let queue = StageQueue::new(Stage::Blur);
/// queue.push(1)?;
/// queue.push(2)?;
/// queue.close()?;
///
/// assert_eq!(queue.pop_blocking()?, Some(1));
/// assert_eq!(queue.pop_blocking()?, Some(2));
/// assert_eq!(queue.pop_blocking()?, None);
/// # Ok::<(), tilefx_pipeline::PipelineError>(())
/// ```
pub struct StageQueue<T> {
    stage: Stage,
    state: Mutex<QueueState<T>>,
    not_empty: Condvar,
}

impl<T> StageQueue<T> {
    /// Creates an empty, open queue for the given stage.
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            state: Mutex::new(QueueState {
                items: VecDeque::new(),
                closed: false,
            }),
            not_empty: Condvar::new(),
        }
    }

    /// Returns the stage this queue feeds.
    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Appends an item to the back of the queue and wakes one consumer.
    ///
    /// Never blocks.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::QueueClosed`] if the queue was closed.
    pub fn push(&self, item: T) -> PipelineResult<()> {
        let mut state = self.lock()?;
        if state.closed {
            return Err(PipelineError::queue_closed(self.stage));
        }
        state.items.push_back(item);
        drop(state);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Removes the front item, blocking while the queue is open but empty.
    ///
    /// Returns `Ok(None)` once the queue is closed and drained; that is the
    /// consumer's signal that no more work will ever arrive.
    pub fn pop_blocking(&self) -> PipelineResult<Option<T>> {
        let mut state = self.lock()?;
        loop {
            if let Some(item) = state.items.pop_front() {
                return Ok(Some(item));
            }
            if state.closed {
                return Ok(None);
            }
            state = self
                .not_empty
                .wait(state)
                .map_err(|_| PipelineError::queue_poisoned(self.stage))?;
        }
    }

    /// Closes the queue and wakes every blocked consumer.
    ///
    /// Queued items stay poppable. Closing an already closed queue is a
    /// no-op.
    pub fn close(&self) -> PipelineResult<()> {
        let mut state = self.lock()?;
        state.closed = true;
        drop(state);
        self.not_empty.notify_all();
        Ok(())
    }

    /// Returns true if the queue has been closed.
    pub fn is_closed(&self) -> PipelineResult<bool> {
        Ok(self.lock()?.closed)
    }

    /// Returns the number of queued items.
    pub fn len(&self) -> PipelineResult<usize> {
        Ok(self.lock()?.items.len())
    }

    /// Returns true if no items are queued.
    pub fn is_empty(&self) -> PipelineResult<bool> {
        Ok(self.lock()?.items.is_empty())
    }

    fn lock(&self) -> PipelineResult<std::sync::MutexGuard<'_, QueueState<T>>> {
        self.state
            .lock()
            .map_err(|_| PipelineError::queue_poisoned(self.stage))
    }
}

impl<T> fmt::Debug for StageQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageQueue")
            .field("stage", &self.stage)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_fifo_order() {
        let queue: StageQueue<u32> = StageQueue::new(Stage::Blur);
        queue.push(1).unwrap();
        queue.push(2).unwrap();
        queue.push(3).unwrap();
        assert_eq!(queue.len().unwrap(), 3);
        assert_eq!(queue.pop_blocking().unwrap(), Some(1));
        assert_eq!(queue.pop_blocking().unwrap(), Some(2));
        assert_eq!(queue.pop_blocking().unwrap(), Some(3));
    }

    #[test]
    fn test_close_drains_then_ends() {
        let queue: StageQueue<u32> = StageQueue::new(Stage::Invert);
        queue.push(7).unwrap();
        queue.close().unwrap();
        assert_eq!(queue.pop_blocking().unwrap(), Some(7));
        assert_eq!(queue.pop_blocking().unwrap(), None);
        assert_eq!(queue.pop_blocking().unwrap(), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let queue: StageQueue<u32> = StageQueue::new(Stage::Blur);
        queue.close().unwrap();
        queue.close().unwrap();
        assert!(queue.is_closed().unwrap());
    }

    #[test]
    fn test_push_after_close_is_rejected() {
        let queue: StageQueue<u32> = StageQueue::new(Stage::Blur);
        queue.close().unwrap();
        let err = queue.push(1).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::QueueClosed { stage: Stage::Blur }
        ));
        assert!(queue.is_empty().unwrap());
    }

    #[test]
    fn test_close_wakes_all_blocked_consumers() {
        let queue: StageQueue<u32> = StageQueue::new(Stage::Blur);
        thread::scope(|scope| {
            let consumers: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| queue.pop_blocking()))
                .collect();
            // Give the consumers time to block on the empty queue.
            thread::sleep(Duration::from_millis(50));
            queue.close().unwrap();
            for consumer in consumers {
                assert_eq!(consumer.join().unwrap().unwrap(), None);
            }
        });
    }

    #[test]
    fn test_blocked_consumer_gets_late_push() {
        let queue: StageQueue<u32> = StageQueue::new(Stage::Invert);
        thread::scope(|scope| {
            let consumer = scope.spawn(|| queue.pop_blocking());
            thread::sleep(Duration::from_millis(50));
            queue.push(42).unwrap();
            assert_eq!(consumer.join().unwrap().unwrap(), Some(42));
        });
    }

    #[test]
    fn test_concurrent_producers_and_consumers() {
        let queue: StageQueue<u32> = StageQueue::new(Stage::Blur);
        let total: u32 = 100;
        thread::scope(|scope| {
            let consumers: Vec<_> = (0..3)
                .map(|_| {
                    scope.spawn(|| {
                        let mut sum = 0u32;
                        while let Some(item) = queue.pop_blocking().unwrap() {
                            sum += item;
                        }
                        sum
                    })
                })
                .collect();
            let producers: Vec<_> = (0..2)
                .map(|producer| {
                    let queue = &queue;
                    scope.spawn(move || {
                        for item in 0..total / 2 {
                            queue.push(producer * total / 2 + item).unwrap();
                        }
                    })
                })
                .collect();
            // Close only after both producers pushed everything.
            for producer in producers {
                producer.join().unwrap();
            }
            queue.close().unwrap();
            let grand_total: u32 = consumers
                .into_iter()
                .map(|consumer| consumer.join().unwrap())
                .sum();
            assert_eq!(grand_total, (0..total).sum::<u32>());
        });
    }
}
