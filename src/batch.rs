//! Batch generation: N posts from one form submission.
//!
//! A batch validates its input up front, then calls the generator once per
//! post, strictly in sequence: call i+1 is only issued after call i resolves,
//! so post i always answers request i. The first failure aborts the batch and
//! drops whatever was produced so far.

use tokio::sync::watch;

use crate::client::{GenerationError, PostGenerator};
use crate::request::{GenerationRequest, PostOptions, ValidationError};
use crate::selection::Selection;

/// Run state of the batch workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPhase {
    #[default]
    Idle,
    InFlight,
    Success,
    Failed,
}

impl BatchPhase {
    /// Get a human-readable description of the current phase
    pub fn description(&self) -> &'static str {
        match self {
            BatchPhase::Idle => "Ready",
            BatchPhase::InFlight => "Generating...",
            BatchPhase::Success => "Posts generated!",
            BatchPhase::Failed => "Generation failed",
        }
    }

    /// Whether the trigger control must stay disabled
    pub fn is_busy(&self) -> bool {
        *self == BatchPhase::InFlight
    }
}

/// Progress information for a running batch
#[derive(Debug, Clone, Default)]
pub struct BatchProgress {
    pub phase: BatchPhase,
    pub completed: u32,
    pub total: u32,
}

impl BatchProgress {
    /// Calculate progress as a fraction (0.0 - 1.0)
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }

    /// Status line for the post currently being generated
    pub fn label(&self) -> String {
        match self.phase {
            BatchPhase::InFlight => format!(
                "Generating post {} of {}...",
                (self.completed + 1).min(self.total),
                self.total
            ),
            phase => phase.description().to_string(),
        }
    }
}

/// A validated batch, ready to run
#[derive(Debug, Clone)]
pub struct BatchPlan {
    request: GenerationRequest,
    post_count: u32,
}

impl BatchPlan {
    /// Validate the form input. Nothing touches the network on failure.
    pub fn new(
        topic: &str,
        selection: &Selection,
        options: &PostOptions,
        post_count: u32,
    ) -> Result<Self, ValidationError> {
        let request = GenerationRequest::build(topic, selection, options)?;
        Ok(Self {
            request,
            post_count,
        })
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    pub fn post_count(&self) -> u32 {
        self.post_count
    }

    /// Generate every post in order, stopping at the first failure.
    ///
    /// Progress is published on `progress_tx` before the first call, after
    /// each post and once more with the final phase.
    pub async fn run(
        self,
        generator: &dyn PostGenerator,
        progress_tx: &watch::Sender<BatchProgress>,
    ) -> Result<Vec<String>, GenerationError> {
        let total = self.post_count;
        let start = std::time::Instant::now();
        let _ = progress_tx.send(BatchProgress {
            phase: BatchPhase::InFlight,
            completed: 0,
            total,
        });

        tracing::info!(
            "Starting batch of {} for {} ({:?})",
            total,
            self.request.platform,
            self.request.topic
        );

        let mut posts = Vec::with_capacity(total as usize);
        for i in 0..total {
            let request = self.request.clone();
            match generator.generate(&request).await {
                Ok(text) => {
                    posts.push(text);
                    let _ = progress_tx.send(BatchProgress {
                        phase: BatchPhase::InFlight,
                        completed: i + 1,
                        total,
                    });
                }
                Err(e) => {
                    tracing::error!("Post {} of {} failed: {}", i + 1, total, e);
                    let _ = progress_tx.send(BatchProgress {
                        phase: BatchPhase::Failed,
                        completed: i,
                        total,
                    });
                    return Err(e);
                }
            }
        }

        tracing::info!(
            "Generated {} posts in {:.1}s",
            posts.len(),
            start.elapsed().as_secs_f32()
        );
        let _ = progress_tx.send(BatchProgress {
            phase: BatchPhase::Success,
            completed: total,
            total,
        });
        Ok(posts)
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted generator for orchestrator tests

    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::client::{GenerationError, PostGenerator};
    use crate::request::GenerationRequest;

    /// Replays canned responses in order and records how it was called
    #[derive(Default)]
    pub struct ScriptedGenerator {
        responses: Mutex<VecDeque<Result<String, GenerationError>>>,
        pub calls: AtomicUsize,
        in_flight: AtomicUsize,
        pub max_in_flight: AtomicUsize,
        pub requests: Mutex<Vec<GenerationRequest>>,
    }

    impl ScriptedGenerator {
        pub fn new(responses: Vec<Result<String, GenerationError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                ..Default::default()
            }
        }

        /// Succeeds `n` times with "Post 1", "Post 2", ...
        pub fn numbered(n: usize) -> Self {
            Self::new((1..=n).map(|i| Ok(format!("Post {}", i))).collect())
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PostGenerator for ScriptedGenerator {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());

            tokio::time::sleep(std::time::Duration::from_millis(2)).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GenerationError::MissingText))
        }
    }
}
