//! Contraction events
//!
//! The snapshot of joint angles captured at the instant the driver
//! joint crosses into the contracted phase. Captured exactly once per
//! rep, consumed once by the scorer and narration pipeline, never
//! persisted.

use std::collections::BTreeMap;

use formverse_catalog::{angle_spec, Exercise};
use formverse_core::{joint_angle, Joint, LandmarkFrame};

/// Immutable angle snapshot, one per completed contraction
#[derive(Debug, Clone)]
pub struct ContractionEvent {
    angles: BTreeMap<Joint, f32>,
}

impl ContractionEvent {
    /// Capture angles for every relevant joint whose three defining
    /// landmarks all pass the visibility floor. Joints failing the
    /// check are omitted, not errored; occlusion is expected input.
    pub fn capture(exercise: &Exercise, frame: &LandmarkFrame) -> Self {
        let mut angles = BTreeMap::new();
        for joint in &exercise.joints {
            let Some(triple) = angle_spec(*joint) else {
                // Validated away at catalog construction
                continue;
            };
            if let Some([a, b, c]) = frame.visible_triple(triple) {
                angles.insert(*joint, joint_angle(a, b, c));
            }
        }
        Self { angles }
    }

    pub fn angle(&self, joint: Joint) -> Option<f32> {
        self.angles.get(&joint).copied()
    }

    pub fn angles(&self) -> &BTreeMap<Joint, f32> {
        &self.angles
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }
}
