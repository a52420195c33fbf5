//! Batch-related application state

use std::sync::Arc;

use eframe::egui;
use tokio::sync::watch;

use crate::batch::{BatchPhase, BatchPlan, BatchProgress};
use crate::client::{GenerationError, PostGenerator};
use crate::state::{FormState, StateEvent};
use crate::task::{PollResult, TaskSlot};

/// Shown in the output area whenever a batch fails, whatever the cause
pub const FAILURE_MESSAGE: &str = "Error: Failed to generate post. Please try again.";

/// Batch-related state
#[derive(Default)]
pub struct BatchState {
    /// Running batch, if any
    task: TaskSlot<Result<Vec<String>, GenerationError>>,
    /// Channel receiver for batch progress
    progress_rx: Option<watch::Receiver<BatchProgress>>,
    /// Current batch progress
    pub progress: BatchProgress,
    /// Cause of the last failure
    pub error: Option<String>,
}

impl BatchState {
    /// Check if a batch is currently in flight
    pub fn is_busy(&self) -> bool {
        self.task.is_running()
    }

    pub fn phase(&self) -> BatchPhase {
        self.progress.phase
    }

    /// Validate the form and start a batch.
    ///
    /// Invalid input produces an alert and leaves the run state untouched.
    /// A start while a batch is in flight is ignored.
    pub fn start(&mut self, form: &FormState, generator: Arc<dyn PostGenerator>) -> Vec<StateEvent> {
        if self.is_busy() {
            tracing::debug!("Batch already in flight, ignoring start");
            return Vec::new();
        }

        let plan = match BatchPlan::new(
            &form.topic,
            &form.selection,
            &form.options(),
            form.post_count,
        ) {
            Ok(plan) => plan,
            Err(e) => {
                tracing::info!("Rejected batch: {}", e);
                return vec![StateEvent::Alert(e.to_string())];
            }
        };

        let total = plan.post_count();
        let (progress_tx, progress_rx) = watch::channel(BatchProgress {
            phase: BatchPhase::InFlight,
            completed: 0,
            total,
        });
        self.progress = progress_rx.borrow().clone();
        self.progress_rx = Some(progress_rx);
        self.error = None;

        self.task.spawn(async move { plan.run(generator.as_ref(), &progress_tx).await });

        vec![
            StateEvent::ClearOutput,
            StateEvent::StatusMessage(self.progress.label()),
        ]
    }

    /// Poll the batch task for progress and completion
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        let mut events = Vec::new();

        if let Some(rx) = &mut self.progress_rx {
            if rx.has_changed().unwrap_or(false) {
                let progress = rx.borrow_and_update().clone();
                if progress.phase.is_busy() {
                    events.push(StateEvent::StatusMessage(progress.label()));
                    self.progress = progress;
                }
            }
        }

        match self.task.poll() {
            PollResult::Complete(Ok(Ok(posts))) => {
                self.progress_rx = None;
                self.progress.phase = BatchPhase::Success;
                self.progress.completed = self.progress.total;
                let count = posts.len();
                events.push(StateEvent::ShowPosts(posts));
                events.push(StateEvent::StatusMessage(format!("Generated {} posts", count)));
                events.push(StateEvent::LogInfo(format!("Batch of {} completed", count)));
            }
            PollResult::Complete(Ok(Err(e))) => {
                let cause = if e.is_transport() {
                    format!("service unreachable ({})", e)
                } else {
                    e.to_string()
                };
                self.fail(cause, &mut events);
            }
            PollResult::Complete(Err(e)) => {
                self.fail(format!("Batch task panicked: {}", e), &mut events);
            }
            PollResult::Pending => ctx.request_repaint(),
            PollResult::Empty => {}
        }

        events
    }

    fn fail(&mut self, cause: String, events: &mut Vec<StateEvent>) {
        self.progress_rx = None;
        self.progress.phase = BatchPhase::Failed;
        events.push(StateEvent::ShowError(FAILURE_MESSAGE.to_string()));
        events.push(StateEvent::StatusMessage(format!("Generation failed: {}", cause)));
        events.push(StateEvent::LogError(format!("Failed to generate post: {}", cause)));
        self.error = Some(cause);
    }
}
