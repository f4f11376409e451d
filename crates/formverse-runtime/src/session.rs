//! Coaching session
//!
//! One session binds a catalog, a selected exercise, and a narrator.
//! Frame processing is synchronous and single-threaded: frame N is
//! fully processed, including any contraction emission, before frame
//! N+1 is considered. Only narration runs as a spawned task, and a
//! generation counter discards its result if the exercise selection
//! changed while it was in flight.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

use formverse_catalog::{Catalog, Exercise};
use formverse_core::{FormResult, LandmarkFrame};
use formverse_engine::{score, DeviationResult, FrameOutcome, RepPhase, RepTracker};

use crate::{ExpertiseLevel, NarrationRequest, Narrator};

/// What the session reports to its consumer
#[derive(Debug)]
pub enum CoachingUpdate {
    /// Peak contraction reached; deviations scored synchronously
    Contraction {
        exercise_key: &'static str,
        deviations: DeviationResult,
    },
    /// A repetition completed; running count for the bound exercise
    RepCompleted(u32),
    /// Narration arrived from the external collaborator
    Narration {
        feedback: String,
        audio: Option<Vec<u8>>,
    },
}

/// Frame-synchronous coaching session.
///
/// Must live inside a tokio runtime: contraction narration is
/// dispatched with `tokio::spawn` so it never blocks frame arrival.
pub struct CoachSession {
    catalog: Catalog,
    tracker: RepTracker,
    expertise: ExpertiseLevel,
    narrator: Arc<dyn Narrator>,
    updates: mpsc::UnboundedSender<CoachingUpdate>,
    /// Bumped on every exercise switch or stop; narration tasks carry
    /// the generation they were spawned under and drop their result if
    /// it is no longer current.
    generation: Arc<AtomicU64>,
}

impl CoachSession {
    /// Create a session bound to `exercise_key`. Returns the session
    /// and the receiving end of its update stream.
    pub fn new(
        catalog: Catalog,
        exercise_key: &str,
        expertise: ExpertiseLevel,
        narrator: Arc<dyn Narrator>,
    ) -> FormResult<(Self, mpsc::UnboundedReceiver<CoachingUpdate>)> {
        let exercise = catalog.get(exercise_key)?.clone();
        let tracker = RepTracker::new(exercise)?;
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Self {
            catalog,
            tracker,
            expertise,
            narrator,
            updates: tx,
            generation: Arc::new(AtomicU64::new(0)),
        };
        Ok((session, rx))
    }

    pub fn exercise(&self) -> &Exercise {
        self.tracker.exercise()
    }

    pub fn rep_count(&self) -> u32 {
        self.tracker.count()
    }

    pub fn phase(&self) -> RepPhase {
        self.tracker.phase()
    }

    pub fn expertise(&self) -> ExpertiseLevel {
        self.expertise
    }

    /// Switch the bound exercise. Unknown keys are a configuration
    /// defect surfaced here, once, not per frame. Count and phase
    /// reset; any in-flight contraction or narration is discarded.
    pub fn select_exercise(&mut self, exercise_key: &str) -> FormResult<()> {
        let exercise = self.catalog.get(exercise_key)?.clone();
        tracing::info!(
            previous = self.exercise().key,
            selected = exercise.key,
            "exercise switched"
        );
        self.tracker = RepTracker::new(exercise)?;
        self.generation.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Stop tracking: same reset semantics as an exercise switch,
    /// keeping the current selection.
    pub fn stop(&mut self) {
        self.tracker.reset();
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Process one landmark frame to completion. At most one phase
    /// transition is observed per frame.
    pub fn process_frame(&mut self, frame: &LandmarkFrame) {
        match self.tracker.advance(frame) {
            FrameOutcome::Inert | FrameOutcome::Holding => {}
            FrameOutcome::Contraction(event) => {
                let exercise = self.tracker.exercise();
                let deviations = score(&event, &exercise.canonical_angles.contracted);
                let _ = self.updates.send(CoachingUpdate::Contraction {
                    exercise_key: exercise.key,
                    deviations,
                });
                self.dispatch_narration(NarrationRequest {
                    exercise_name: exercise.name.to_string(),
                    user_angles: event.angles().clone(),
                    canonical_angles: exercise.canonical_angles.contracted.clone(),
                    expertise: self.expertise,
                });
            }
            FrameOutcome::RepCompleted(count) => {
                tracing::info!(exercise = self.exercise().key, count, "rep counted");
                let _ = self.updates.send(CoachingUpdate::RepCompleted(count));
            }
        }
    }

    /// Fire-and-forget narration. No queueing or backpressure: each
    /// contraction dispatches independently, and a new one may fire
    /// while earlier requests are still outstanding.
    fn dispatch_narration(&self, request: NarrationRequest) {
        let narrator = Arc::clone(&self.narrator);
        let updates = self.updates.clone();
        let generation = Arc::clone(&self.generation);
        let spawned_at = generation.load(Ordering::SeqCst);

        tokio::spawn(async move {
            match narrator.narrate(request).await {
                Ok(narration) => {
                    if generation.load(Ordering::SeqCst) == spawned_at {
                        let _ = updates.send(CoachingUpdate::Narration {
                            feedback: narration.feedback,
                            audio: narration.audio,
                        });
                    } else {
                        tracing::debug!("dropping narration from a stale selection");
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "narration failed");
                }
            }
        });
    }
}
