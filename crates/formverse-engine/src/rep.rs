//! Repetition state machine
//!
//! Two states, driven by a single scalar: the angle of the exercise's
//! driver joint, recomputed every frame. The band between the two
//! thresholds is a deliberate hysteresis zone; an angle sitting exactly
//! on a threshold crosses nothing.

use formverse_catalog::{require_angle_spec, Exercise, LandmarkTriple};
use formverse_core::{joint_angle, FormResult, LandmarkFrame};

use crate::ContractionEvent;

/// Repetition phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepPhase {
    Extended,
    Contracted,
}

/// What one frame did to the tracker
#[derive(Debug)]
pub enum FrameOutcome {
    /// Driver joint not fully visible; state carried over unchanged
    Inert,
    /// Driver visible but no threshold crossed
    Holding,
    /// Entered the contracted phase; angles captured
    Contraction(ContractionEvent),
    /// Returned to the extended phase; count after the increment
    RepCompleted(u32),
}

/// Tracks repetitions for one bound exercise.
///
/// Bound state is reset, never migrated: switching exercises means a
/// fresh tracker (or `reset`), discarding any contraction in flight.
pub struct RepTracker {
    exercise: Exercise,
    driver_triple: LandmarkTriple,
    phase: RepPhase,
    count: u32,
}

impl RepTracker {
    pub fn new(exercise: Exercise) -> FormResult<Self> {
        let driver_triple = require_angle_spec(exercise.rep_thresholds.driver)?;
        Ok(Self {
            exercise,
            driver_triple,
            phase: RepPhase::Extended,
            count: 0,
        })
    }

    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    pub fn phase(&self) -> RepPhase {
        self.phase
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Process one frame. At most one transition occurs per frame.
    pub fn advance(&mut self, frame: &LandmarkFrame) -> FrameOutcome {
        let Some([a, b, c]) = frame.visible_triple(self.driver_triple) else {
            return FrameOutcome::Inert;
        };
        let angle = joint_angle(a, b, c);
        let thresholds = self.exercise.rep_thresholds;

        match self.phase {
            RepPhase::Extended if angle < thresholds.contracted => {
                self.phase = RepPhase::Contracted;
                let event = ContractionEvent::capture(&self.exercise, frame);
                tracing::debug!(
                    exercise = self.exercise.key,
                    driver_angle = angle,
                    captured = event.len(),
                    "entered contraction"
                );
                FrameOutcome::Contraction(event)
            }
            RepPhase::Contracted if angle > thresholds.extended => {
                self.phase = RepPhase::Extended;
                self.count += 1;
                tracing::debug!(
                    exercise = self.exercise.key,
                    driver_angle = angle,
                    count = self.count,
                    "rep completed"
                );
                FrameOutcome::RepCompleted(self.count)
            }
            _ => FrameOutcome::Holding,
        }
    }

    /// Back to `Extended` with a zero count. Any in-flight contraction
    /// is discarded, not completed.
    pub fn reset(&mut self) {
        self.phase = RepPhase::Extended;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formverse_catalog::{angle_spec, Catalog};
    use formverse_core::{Joint, Landmark};

    /// Frame with the driver joint of `exercise` posed at `degrees`
    /// and everything else invisible.
    fn driver_frame(exercise: &Exercise, degrees: f32) -> LandmarkFrame {
        let (a, b, c) = angle_spec(exercise.rep_thresholds.driver).unwrap();
        let rad = degrees.to_radians();
        let mut frame = LandmarkFrame::empty();
        frame.set(b, Landmark::new(0.5, 0.5, 0.0, 1.0));
        frame.set(c, Landmark::new(0.7, 0.5, 0.0, 1.0));
        frame.set(
            a,
            Landmark::new(0.5 + 0.2 * rad.cos(), 0.5 + 0.2 * rad.sin(), 0.0, 1.0),
        );
        frame
    }

    fn bicep_tracker() -> RepTracker {
        let catalog = Catalog::builtin().unwrap();
        RepTracker::new(catalog.get("bicep_curl").unwrap().clone()).unwrap()
    }

    #[test]
    fn test_single_rep_sequence() {
        // thresholds: contracted 60, extended 150
        let mut tracker = bicep_tracker();
        let exercise = tracker.exercise().clone();

        let mut contractions = 0;
        let mut completions = 0;
        for degrees in [170.0, 160.0, 50.0, 40.0, 160.0, 170.0] {
            match tracker.advance(&driver_frame(&exercise, degrees)) {
                FrameOutcome::Contraction(event) => {
                    contractions += 1;
                    // the driver joint itself was visible, so captured
                    assert!(event.angle(Joint::RightElbow).is_some());
                }
                FrameOutcome::RepCompleted(count) => {
                    completions += 1;
                    assert_eq!(count, 1);
                }
                FrameOutcome::Holding => {}
                FrameOutcome::Inert => panic!("driver was visible"),
            }
        }

        assert_eq!(contractions, 1);
        assert_eq!(completions, 1);
        assert_eq!(tracker.count(), 1);
        assert_eq!(tracker.phase(), RepPhase::Extended);
    }

    #[test]
    fn test_dip_to_exact_threshold_does_not_transition() {
        // Contracted gate moved to 90 so the threshold frame can be an
        // exactly perpendicular pose: dot product is exactly zero and
        // the computed angle never lands below the gate.
        let catalog = Catalog::builtin().unwrap();
        let mut exercise = catalog.get("bicep_curl").unwrap().clone();
        exercise.rep_thresholds.contracted = 90.0;
        let mut tracker = RepTracker::new(exercise.clone()).unwrap();

        let (a, b, c) = angle_spec(exercise.rep_thresholds.driver).unwrap();
        let mut threshold_frame = LandmarkFrame::empty();
        threshold_frame.set(b, Landmark::new(0.5, 0.5, 0.0, 1.0));
        threshold_frame.set(c, Landmark::new(0.7, 0.5, 0.0, 1.0));
        threshold_frame.set(a, Landmark::new(0.5, 0.7, 0.0, 1.0));

        for frame in [
            driver_frame(&exercise, 170.0),
            driver_frame(&exercise, 120.0),
            threshold_frame.clone(),
            threshold_frame,
            driver_frame(&exercise, 170.0),
        ] {
            assert!(matches!(tracker.advance(&frame), FrameOutcome::Holding));
        }
        assert_eq!(tracker.count(), 0);
        assert_eq!(tracker.phase(), RepPhase::Extended);
    }

    #[test]
    fn test_hysteresis_band_is_inert_between_phases() {
        let mut tracker = bicep_tracker();
        let exercise = tracker.exercise().clone();

        tracker.advance(&driver_frame(&exercise, 50.0));
        assert_eq!(tracker.phase(), RepPhase::Contracted);

        // wander inside the band and back under the contracted gate:
        // already contracted, nothing fires
        for degrees in [100.0, 140.0, 55.0, 100.0] {
            assert!(matches!(
                tracker.advance(&driver_frame(&exercise, degrees)),
                FrameOutcome::Holding
            ));
        }
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn test_invisible_driver_is_inert() {
        let mut tracker = bicep_tracker();
        let exercise = tracker.exercise().clone();

        tracker.advance(&driver_frame(&exercise, 50.0));
        assert_eq!(tracker.phase(), RepPhase::Contracted);

        // a fully occluded frame carries state over, even at an angle
        // that would otherwise complete the rep
        let mut occluded = driver_frame(&exercise, 170.0);
        let (a, _, _) = angle_spec(exercise.rep_thresholds.driver).unwrap();
        occluded.set(a, Landmark::new(0.5, 0.5, 0.0, 0.2));
        assert!(matches!(
            tracker.advance(&occluded),
            FrameOutcome::Inert
        ));
        assert_eq!(tracker.phase(), RepPhase::Contracted);
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn test_reset_discards_contraction_in_flight() {
        let mut tracker = bicep_tracker();
        let exercise = tracker.exercise().clone();

        tracker.advance(&driver_frame(&exercise, 50.0));
        tracker.advance(&driver_frame(&exercise, 160.0));
        tracker.advance(&driver_frame(&exercise, 50.0));
        assert_eq!(tracker.count(), 1);
        assert_eq!(tracker.phase(), RepPhase::Contracted);

        tracker.reset();
        assert_eq!(tracker.count(), 0);
        assert_eq!(tracker.phase(), RepPhase::Extended);

        // the discarded contraction never completes as a rep
        assert!(matches!(
            tracker.advance(&driver_frame(&exercise, 170.0)),
            FrameOutcome::Holding
        ));
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn test_overhead_press_inverted_thresholds() {
        // contraction is the high-angle position: contracted 160,
        // extended 90, driver right shoulder
        let catalog = Catalog::builtin().unwrap();
        let exercise = catalog.get("overhead_press").unwrap().clone();
        let mut tracker = RepTracker::new(exercise.clone()).unwrap();

        // below the contracted gate immediately counts as contraction
        assert!(matches!(
            tracker.advance(&driver_frame(&exercise, 80.0)),
            FrameOutcome::Contraction(_)
        ));
        // rising past the extended gate completes the rep
        assert!(matches!(
            tracker.advance(&driver_frame(&exercise, 100.0)),
            FrameOutcome::RepCompleted(1)
        ));
    }
}
