//! Joint identifiers
//!
//! The twelve joints FormVerse gives feedback on, each pinned to its
//! index in the external pose model's 33-landmark scheme. The core does
//! not own that indexing; it mirrors it.

use std::fmt;

/// Joint identifier for the tracked skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Joint {
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl Joint {
    /// All joints in order
    pub fn all() -> &'static [Joint] {
        &[
            Joint::LeftShoulder,
            Joint::RightShoulder,
            Joint::LeftElbow,
            Joint::RightElbow,
            Joint::LeftWrist,
            Joint::RightWrist,
            Joint::LeftHip,
            Joint::RightHip,
            Joint::LeftKnee,
            Joint::RightKnee,
            Joint::LeftAnkle,
            Joint::RightAnkle,
        ]
    }

    /// Index of this joint in the pose model's landmark array
    pub fn landmark_index(self) -> usize {
        match self {
            Joint::LeftShoulder => 11,
            Joint::RightShoulder => 12,
            Joint::LeftElbow => 13,
            Joint::RightElbow => 14,
            Joint::LeftWrist => 15,
            Joint::RightWrist => 16,
            Joint::LeftHip => 23,
            Joint::RightHip => 24,
            Joint::LeftKnee => 25,
            Joint::RightKnee => 26,
            Joint::LeftAnkle => 27,
            Joint::RightAnkle => 28,
        }
    }

    /// Stable snake_case name, matching the feedback wire format
    pub fn name(self) -> &'static str {
        match self {
            Joint::LeftShoulder => "left_shoulder",
            Joint::RightShoulder => "right_shoulder",
            Joint::LeftElbow => "left_elbow",
            Joint::RightElbow => "right_elbow",
            Joint::LeftWrist => "left_wrist",
            Joint::RightWrist => "right_wrist",
            Joint::LeftHip => "left_hip",
            Joint::RightHip => "right_hip",
            Joint::LeftKnee => "left_knee",
            Joint::RightKnee => "right_knee",
            Joint::LeftAnkle => "left_ankle",
            Joint::RightAnkle => "right_ankle",
        }
    }

    /// Parse a snake_case joint name
    pub fn from_name(name: &str) -> Option<Joint> {
        Joint::all().iter().copied().find(|j| j.name() == name)
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
