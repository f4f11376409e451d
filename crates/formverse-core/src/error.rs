//! Error types for FormVerse
//!
//! Only configuration defects are errors here. Degenerate geometry and
//! low-visibility landmarks are handled by contract (zero angle,
//! omission) and never surface as errors.

use thiserror::Error;

use crate::Joint;

/// Core FormVerse errors
#[derive(Error, Debug)]
pub enum FormError {
    // Catalog errors
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    #[error("Unknown joint name: {0}")]
    UnknownJoint(String),

    #[error("No angle spec for joint {0}")]
    MissingAngleSpec(Joint),

    #[error("Invalid catalog entry for {exercise}: {reason}")]
    InvalidCatalogEntry { exercise: String, reason: String },

    // Narration errors (owned by the external collaborator; recorded
    // here so narrator implementations share one taxonomy)
    #[error("Narration failed: {0}")]
    NarrationFailed(String),
}

/// Result type for FormVerse operations
pub type FormResult<T> = Result<T, FormError>;
