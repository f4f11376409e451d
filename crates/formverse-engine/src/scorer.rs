//! Deviation scorer
//!
//! Classifies each captured joint angle against the exercise's
//! canonical contracted angle. A joint without a canonical target is
//! excluded from the result entirely: no claim can be made about
//! conformance without a reference value.

use std::collections::BTreeMap;

use formverse_core::Joint;

use crate::ContractionEvent;

/// Maximum absolute deviation, in degrees, still counted as good form.
/// Fixed design constant, not configurable per exercise. The boundary
/// is inclusive.
pub const TOLERANCE_DEGREES: f32 = 25.0;

/// Per-joint within-tolerance classification for one contraction.
/// Always fully recomputed per event, never incrementally updated.
#[derive(Debug, Clone, Default)]
pub struct DeviationResult {
    joints: BTreeMap<Joint, bool>,
}

impl DeviationResult {
    pub fn within_tolerance(&self, joint: Joint) -> Option<bool> {
        self.joints.get(&joint).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Joint, bool)> + '_ {
        self.joints.iter().map(|(j, ok)| (*j, *ok))
    }

    /// Joints that deviated beyond tolerance
    pub fn out_of_tolerance(&self) -> impl Iterator<Item = Joint> + '_ {
        self.joints
            .iter()
            .filter(|(_, ok)| !**ok)
            .map(|(j, _)| *j)
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }
}

/// Score a contraction event against canonical contracted angles.
pub fn score(event: &ContractionEvent, canonical: &BTreeMap<Joint, f32>) -> DeviationResult {
    let mut joints = BTreeMap::new();
    for (joint, user_angle) in event.angles() {
        if let Some(target) = canonical.get(joint) {
            joints.insert(*joint, (user_angle - target).abs() <= TOLERANCE_DEGREES);
        }
    }
    DeviationResult { joints }
}
