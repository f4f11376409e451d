//! Landmarks and per-frame landmark sets
//!
//! A landmark is one positional sample for one body joint in one frame,
//! produced by the external pose-estimation model. Landmarks are
//! ephemeral: nothing here outlives the frame except what the rep
//! tracker explicitly snapshots at a contraction.

/// Number of landmarks the pose model emits per frame
pub const LANDMARK_COUNT: usize = 33;

/// Minimum visibility for a landmark to count as seen.
/// Strictly greater-than passes; exactly at the floor does not.
pub const VISIBILITY_FLOOR: f32 = 0.5;

/// 3D position (normalized frame-relative coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position3D {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// One landmark: position plus detection confidence
#[derive(Debug, Clone, Copy, Default)]
pub struct Landmark {
    pub position: Position3D,
    /// Visibility confidence in [0, 1]
    pub visibility: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self {
            position: Position3D::new(x, y, z),
            visibility,
        }
    }

    /// Is this landmark visible enough to use?
    pub fn is_visible(&self) -> bool {
        self.visibility > VISIBILITY_FLOOR
    }
}

/// All landmarks for a single frame, in pose-model index order
#[derive(Debug, Clone)]
pub struct LandmarkFrame {
    landmarks: Vec<Landmark>,
}

impl LandmarkFrame {
    /// Frame with every landmark at the origin with zero visibility
    pub fn empty() -> Self {
        Self {
            landmarks: vec![Landmark::default(); LANDMARK_COUNT],
        }
    }

    /// Build a frame from raw landmarks. Frames shorter than the pose
    /// model's full set are allowed; missing indices read as absent.
    pub fn from_landmarks(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    pub fn set(&mut self, index: usize, landmark: Landmark) {
        if index < self.landmarks.len() {
            self.landmarks[index] = landmark;
        }
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Landmark at `index`, only if it passes the visibility floor
    pub fn visible(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index).filter(|l| l.is_visible())
    }

    /// Positions for an index triple, only if all three landmarks pass
    /// the visibility floor. Partial visibility yields `None`.
    pub fn visible_triple(&self, triple: (usize, usize, usize)) -> Option<[Position3D; 3]> {
        let a = self.visible(triple.0)?;
        let b = self.visible(triple.1)?;
        let c = self.visible(triple.2)?;
        Some([a.position, b.position, c.position])
    }
}
