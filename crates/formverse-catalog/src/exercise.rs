//! Exercise catalog
//!
//! Immutable reference data selected by key. Each exercise names the
//! joints that matter for feedback, canonical target angles per phase,
//! and the single driver joint plus thresholds that gate repetition
//! phase transitions. Entries are validated once at construction, never
//! trusted implicitly at angle-computation time.

use std::collections::BTreeMap;

use formverse_core::{FormError, FormResult, Joint};

use crate::angle_spec;

/// Reference target angles per joint, partial per phase. A joint may
/// appear in an exercise's joint list without a target for one phase;
/// it is then simply not scored against that phase.
#[derive(Debug, Clone, Default)]
pub struct CanonicalAngles {
    pub contracted: BTreeMap<Joint, f32>,
    pub extended: BTreeMap<Joint, f32>,
}

/// Phase-transition gates for repetition counting.
///
/// `contracted` and `extended` are deliberately not ordered relative to
/// each other: for most exercises contraction is the low-angle position,
/// but overhead press inverts this (arms locked out overhead).
#[derive(Debug, Clone, Copy)]
pub struct RepThresholds {
    /// The single joint whose angle gates transitions
    pub driver: Joint,
    /// Entering contraction: driver angle strictly below this
    pub contracted: f32,
    /// Returning to extension: driver angle strictly above this
    pub extended: f32,
}

/// One exercise: identity, relevant joints, targets, rep gates
#[derive(Debug, Clone)]
pub struct Exercise {
    pub key: &'static str,
    pub name: &'static str,
    pub joints: Vec<Joint>,
    pub canonical_angles: CanonicalAngles,
    pub rep_thresholds: RepThresholds,
}

impl Exercise {
    /// Check that every referenced joint has an angle spec and that
    /// canonical targets only name listed joints.
    fn validate(&self) -> FormResult<()> {
        let invalid = |reason: String| FormError::InvalidCatalogEntry {
            exercise: self.key.to_string(),
            reason,
        };

        if self.joints.is_empty() {
            return Err(invalid("no joints listed".to_string()));
        }
        if angle_spec(self.rep_thresholds.driver).is_none() {
            return Err(invalid(format!(
                "driver joint {} has no angle spec",
                self.rep_thresholds.driver
            )));
        }
        for joint in &self.joints {
            if angle_spec(*joint).is_none() {
                return Err(invalid(format!("joint {joint} has no angle spec")));
            }
        }
        for joint in self
            .canonical_angles
            .contracted
            .keys()
            .chain(self.canonical_angles.extended.keys())
        {
            if !self.joints.contains(joint) {
                return Err(invalid(format!(
                    "canonical angle for unlisted joint {joint}"
                )));
            }
        }
        Ok(())
    }
}

/// The exercise catalog, keyed by string identifier
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: BTreeMap<&'static str, Exercise>,
}

impl Catalog {
    /// The built-in catalog. Validation failure here is a defect in the
    /// shipped data, surfaced as an error rather than a panic so callers
    /// decide how loudly to die.
    pub fn builtin() -> FormResult<Self> {
        Self::from_exercises(vec![bicep_curl(), squat(), overhead_press()])
    }

    pub fn from_exercises(exercises: Vec<Exercise>) -> FormResult<Self> {
        let mut map = BTreeMap::new();
        for exercise in exercises {
            exercise.validate()?;
            map.insert(exercise.key, exercise);
        }
        Ok(Self { exercises: map })
    }

    pub fn get(&self, key: &str) -> FormResult<&Exercise> {
        self.exercises
            .get(key)
            .ok_or_else(|| FormError::UnknownExercise(key.to_string()))
    }

    /// (key, display name) pairs for selection UIs
    pub fn listing(&self) -> Vec<(&'static str, &'static str)> {
        self.exercises.values().map(|e| (e.key, e.name)).collect()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

fn angles(pairs: &[(Joint, f32)]) -> BTreeMap<Joint, f32> {
    pairs.iter().copied().collect()
}

fn bicep_curl() -> Exercise {
    Exercise {
        key: "bicep_curl",
        name: "Bicep Curls",
        joints: vec![Joint::LeftElbow, Joint::RightElbow],
        canonical_angles: CanonicalAngles {
            contracted: angles(&[(Joint::LeftElbow, 30.0), (Joint::RightElbow, 30.0)]),
            extended: angles(&[(Joint::LeftElbow, 175.0), (Joint::RightElbow, 175.0)]),
        },
        rep_thresholds: RepThresholds {
            driver: Joint::RightElbow,
            contracted: 60.0,
            extended: 150.0,
        },
    }
}

fn squat() -> Exercise {
    Exercise {
        key: "squat",
        name: "Squats",
        joints: vec![
            Joint::LeftKnee,
            Joint::RightKnee,
            Joint::LeftHip,
            Joint::RightHip,
        ],
        canonical_angles: CanonicalAngles {
            contracted: angles(&[
                (Joint::LeftKnee, 70.0),
                (Joint::RightKnee, 70.0),
                (Joint::LeftHip, 80.0),
                (Joint::RightHip, 80.0),
            ]),
            extended: angles(&[
                (Joint::LeftKnee, 175.0),
                (Joint::RightKnee, 175.0),
                (Joint::LeftHip, 175.0),
                (Joint::RightHip, 175.0),
            ]),
        },
        rep_thresholds: RepThresholds {
            driver: Joint::RightKnee,
            contracted: 90.0,
            extended: 170.0,
        },
    }
}

fn overhead_press() -> Exercise {
    Exercise {
        key: "overhead_press",
        name: "Overhead Press",
        joints: vec![
            Joint::LeftShoulder,
            Joint::RightShoulder,
            Joint::LeftElbow,
            Joint::RightElbow,
        ],
        canonical_angles: CanonicalAngles {
            contracted: angles(&[
                (Joint::LeftShoulder, 170.0),
                (Joint::RightShoulder, 170.0),
                (Joint::LeftElbow, 170.0),
                (Joint::RightElbow, 170.0),
            ]),
            extended: angles(&[
                (Joint::LeftShoulder, 80.0),
                (Joint::RightShoulder, 80.0),
                (Joint::LeftElbow, 80.0),
                (Joint::RightElbow, 80.0),
            ]),
        },
        rep_thresholds: RepThresholds {
            driver: Joint::RightShoulder,
            contracted: 160.0,
            extended: 90.0,
        },
    }
}
