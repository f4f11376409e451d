//! Joint angle specs
//!
//! Each measurable joint maps to an ordered triple of joints `(a, b, c)`:
//! the angle is measured at `b` between the rays to `a` and `c`. Wrists
//! and ankles terminate limbs and have no angle of their own.

use formverse_core::{FormError, FormResult, Joint};

/// Ordered landmark-index triple defining one joint angle
pub type LandmarkTriple = (usize, usize, usize);

/// The joint triple whose middle element carries the angle, or `None`
/// for joints with no defined angle.
pub fn angle_joints(joint: Joint) -> Option<[Joint; 3]> {
    match joint {
        Joint::LeftShoulder => Some([Joint::LeftElbow, Joint::LeftShoulder, Joint::LeftHip]),
        Joint::RightShoulder => Some([Joint::RightElbow, Joint::RightShoulder, Joint::RightHip]),
        Joint::LeftElbow => Some([Joint::LeftWrist, Joint::LeftElbow, Joint::LeftShoulder]),
        Joint::RightElbow => Some([Joint::RightWrist, Joint::RightElbow, Joint::RightShoulder]),
        Joint::LeftHip => Some([Joint::LeftShoulder, Joint::LeftHip, Joint::LeftKnee]),
        Joint::RightHip => Some([Joint::RightShoulder, Joint::RightHip, Joint::RightKnee]),
        Joint::LeftKnee => Some([Joint::LeftHip, Joint::LeftKnee, Joint::LeftAnkle]),
        Joint::RightKnee => Some([Joint::RightHip, Joint::RightKnee, Joint::RightAnkle]),
        Joint::LeftWrist
        | Joint::RightWrist
        | Joint::LeftAnkle
        | Joint::RightAnkle => None,
    }
}

/// Landmark indices for a joint's angle triple
pub fn angle_spec(joint: Joint) -> Option<LandmarkTriple> {
    angle_joints(joint).map(|[a, b, c]| {
        (
            a.landmark_index(),
            b.landmark_index(),
            c.landmark_index(),
        )
    })
}

/// `angle_spec`, with a missing spec promoted to a configuration error
pub fn require_angle_spec(joint: Joint) -> FormResult<LandmarkTriple> {
    angle_spec(joint).ok_or(FormError::MissingAngleSpec(joint))
}
