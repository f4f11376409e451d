//! Narration interface
//!
//! Models the external feedback-generation and text-to-speech
//! collaborators. The core's obligation ends at handing over the
//! contraction snapshot; everything past that boundary is opaque,
//! including the audio artifact format.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use formverse_core::{FormResult, Joint};

/// User expertise level, shaping the tone of generated feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpertiseLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExpertiseLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ExpertiseLevel::Beginner => "beginner",
            ExpertiseLevel::Intermediate => "intermediate",
            ExpertiseLevel::Advanced => "advanced",
        }
    }
}

/// Everything the external feedback service needs for one contraction
#[derive(Debug, Clone)]
pub struct NarrationRequest {
    pub exercise_name: String,
    pub user_angles: BTreeMap<Joint, f32>,
    pub canonical_angles: BTreeMap<Joint, f32>,
    pub expertise: ExpertiseLevel,
}

/// Free-text feedback plus an optional synthesized audio artifact
#[derive(Debug, Clone)]
pub struct Narration {
    pub feedback: String,
    /// Encoded audio, opaque to the core
    pub audio: Option<Vec<u8>>,
}

/// External narration collaborator.
///
/// Implementations may be slow; the session never awaits them on the
/// frame path. Failures are logged and dropped, never retried.
pub trait Narrator: Send + Sync + 'static {
    fn narrate(
        &self,
        request: NarrationRequest,
    ) -> Pin<Box<dyn Future<Output = FormResult<Narration>> + Send>>;
}

/// Narrator that produces no feedback. Useful for tests and for
/// sessions where narration is disabled.
#[derive(Debug, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn narrate(
        &self,
        _request: NarrationRequest,
    ) -> Pin<Box<dyn Future<Output = FormResult<Narration>> + Send>> {
        Box::pin(async {
            Ok(Narration {
                feedback: String::new(),
                audio: None,
            })
        })
    }
}
