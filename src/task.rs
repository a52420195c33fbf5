//! Background task slot polled from the UI thread.
//!
//! The UI never awaits. Work is spawned onto the tokio runtime and the frame
//! loop checks on it once per frame; a slot holds at most one task, which is
//! what keeps a second batch from starting while one is in flight.

use std::future::Future;

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

/// Result of polling a task slot
pub enum PollResult<T> {
    /// Nothing has been spawned, or the last result was already taken
    Empty,
    /// Task is still running
    Pending,
    /// Task finished; `Err` means it panicked or was aborted
    Complete(Result<T, JoinError>),
}

/// Holds at most one running task
pub struct TaskSlot<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T> Default for TaskSlot<T> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<T: Send + 'static> TaskSlot<T> {
    /// Spawn `future` into the slot.
    ///
    /// Returns `false` and drops `future` unstarted if a task is already running.
    pub fn spawn<F>(&mut self, future: F) -> bool
    where
        F: Future<Output = T> + Send + 'static,
    {
        if self.is_running() {
            return false;
        }
        self.handle = Some(tokio::spawn(future));
        true
    }

    /// Whether a task occupies the slot
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Take the task's result if it has finished, emptying the slot
    pub fn poll(&mut self) -> PollResult<T> {
        let Some(mut handle) = self.handle.take_if(|h| h.is_finished()) else {
            return if self.handle.is_some() {
                PollResult::Pending
            } else {
                PollResult::Empty
            };
        };

        match (&mut handle).now_or_never() {
            Some(result) => PollResult::Complete(result),
            None => {
                tracing::warn!("Finished task was not ready, polling again next frame");
                self.handle = Some(handle);
                PollResult::Pending
            }
        }
    }
}
