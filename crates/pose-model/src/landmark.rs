//! Landmark and pose-set types.
//!
//! Pose sets follow the 33-point body schema produced by common pose
//! estimators. Only a handful of indices matter to the tracker and the
//! detectors; they are named in [`body`].

use serde::{Deserialize, Serialize};

/// Number of landmarks in a complete pose set.
pub const LANDMARK_COUNT: usize = 33;

/// Named indices into the 33-point body schema.
pub mod body {
    pub const NOSE: usize = 0;
    pub const LEFT_SHOULDER: usize = 11;
    pub const RIGHT_SHOULDER: usize = 12;
    pub const LEFT_HIP: usize = 23;
    pub const RIGHT_HIP: usize = 24;
    pub const LEFT_KNEE: usize = 25;
    pub const RIGHT_KNEE: usize = 26;
    pub const LEFT_ANKLE: usize = 27;
    pub const RIGHT_ANKLE: usize = 28;

    /// Indices above this are major joints (shoulders and below).
    pub const LAST_FACE_INDEX: usize = 10;

    /// Keypoints averaged for pose confidence.
    pub const CONFIDENCE_KEYPOINTS: [usize; 9] = [
        NOSE,
        LEFT_SHOULDER,
        RIGHT_SHOULDER,
        LEFT_HIP,
        RIGHT_HIP,
        LEFT_KNEE,
        RIGHT_KNEE,
        LEFT_ANKLE,
        RIGHT_ANKLE,
    ];

    /// Whether an index belongs to a major joint rather than the face.
    pub fn is_major_joint(index: usize) -> bool {
        index > LAST_FACE_INDEX
    }
}

/// A point in normalized image space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between two points.
    pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
        Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }

    /// Linear blend: `self * (1 - t) + other * t`.
    pub fn lerp(&self, other: &Point2, t: f64) -> Point2 {
        Point2::new(
            self.x * (1.0 - t) + other.x * t,
            self.y * (1.0 - t) + other.y * t,
        )
    }
}

/// A single skeletal joint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized X coordinate [0.0, 1.0].
    pub x: f64,
    /// Normalized Y coordinate [0.0, 1.0], growing downwards.
    pub y: f64,
    /// Detector confidence that the joint is visible, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    /// Visibility used when the detector reports none.
    pub const DEFAULT_VISIBILITY: f64 = 0.5;

    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            visibility: None,
        }
    }

    pub fn with_visibility(x: f64, y: f64, visibility: f64) -> Self {
        Self {
            x,
            y,
            visibility: Some(visibility),
        }
    }

    pub fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Visibility, falling back to [`Self::DEFAULT_VISIBILITY`].
    pub fn visibility_or_default(&self) -> f64 {
        self.visibility.unwrap_or(Self::DEFAULT_VISIBILITY)
    }
}

/// One subject's ordered landmark list.
///
/// Usually [`LANDMARK_COUNT`] long, but detectors may truncate it; every
/// consumer must tolerate short sets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoseLandmarks(Vec<Landmark>);

impl PoseLandmarks {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self(landmarks)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.0.get(index)
    }

    /// Position of the landmark at `index`, if present.
    pub fn point(&self, index: usize) -> Option<Point2> {
        self.get(index).map(Landmark::point)
    }

    /// Whether the set reaches at least `count` entries.
    pub fn covers(&self, count: usize) -> bool {
        self.0.len() >= count
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Landmark> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.0
    }

    /// Mutable access for building synthetic poses.
    pub fn set(&mut self, index: usize, landmark: Landmark) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = landmark;
        }
    }
}

impl From<Vec<Landmark>> for PoseLandmarks {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self(landmarks)
    }
}

impl FromIterator<Landmark> for PoseLandmarks {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
