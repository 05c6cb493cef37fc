//! Geometry derived from a single pose set.

use duotrack_pose_model::landmark::{body, Landmark, Point2, PoseLandmarks};
use serde::{Deserialize, Serialize};

/// Landmarks needed before the hip midpoint is trusted.
const MIN_LANDMARKS_FOR_CENTER: usize = body::LEFT_KNEE;

/// Landmarks needed to reach both ankles.
pub const MIN_LANDMARKS_FOR_LEGS: usize = body::RIGHT_ANKLE + 1;

/// Hip midpoint of a pose, or the origin when the set is too short.
pub fn center_of(landmarks: &PoseLandmarks) -> Point2 {
    if !landmarks.covers(MIN_LANDMARKS_FOR_CENTER) {
        return Point2::ORIGIN;
    }
    match (
        landmarks.point(body::LEFT_HIP),
        landmarks.point(body::RIGHT_HIP),
    ) {
        (Some(l), Some(r)) => Point2::midpoint(&l, &r),
        _ => Point2::ORIGIN,
    }
}

/// Mean visibility over the confidence keypoints that are present.
///
/// Missing visibility counts as [`Landmark::DEFAULT_VISIBILITY`]; a pose
/// with none of the keypoints scores zero.
pub fn confidence_of(landmarks: &PoseLandmarks) -> f64 {
    let (total, count) = body::CONFIDENCE_KEYPOINTS
        .iter()
        .filter_map(|&i| landmarks.get(i))
        .fold((0.0, 0usize), |(sum, n), lm| {
            (sum + lm.visibility_or_default(), n + 1)
        });

    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Body proportions used to normalize motion signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Mean hip-to-ankle distance.
    pub leg_length: f64,
    /// Shoulder midpoint to hip midpoint.
    pub torso_length: f64,
    /// Vertical nose-to-lowest-ankle span.
    pub overall_height: f64,
}

impl Default for BodyMetrics {
    fn default() -> Self {
        Self {
            leg_length: 0.2,
            torso_length: 0.15,
            overall_height: 0.6,
        }
    }
}

impl BodyMetrics {
    /// Measure a pose, falling back to defaults when the legs are not covered.
    pub fn from_landmarks(landmarks: &PoseLandmarks) -> Self {
        if !landmarks.covers(MIN_LANDMARKS_FOR_LEGS) {
            return Self::default();
        }
        let p = |i: usize| landmarks.point(i).unwrap_or_default();

        let left_leg = p(body::LEFT_HIP).distance(&p(body::LEFT_ANKLE));
        let right_leg = p(body::RIGHT_HIP).distance(&p(body::RIGHT_ANKLE));

        let shoulders = Point2::midpoint(&p(body::LEFT_SHOULDER), &p(body::RIGHT_SHOULDER));
        let hips = Point2::midpoint(&p(body::LEFT_HIP), &p(body::RIGHT_HIP));

        let lowest_ankle = p(body::LEFT_ANKLE).y.max(p(body::RIGHT_ANKLE).y);

        Self {
            leg_length: (left_leg + right_leg) / 2.0,
            torso_length: shoulders.distance(&hips),
            overall_height: (p(body::NOSE).y - lowest_ankle).abs(),
        }
    }
}

/// Build a standing 33-point pose centred at `center_x`.
///
/// Hips sit at y=0.5, knees at 0.7, ankles at 0.9. Used by tests and
/// synthetic fixtures.
pub fn standing_pose(center_x: f64, visibility: Option<f64>) -> PoseLandmarks {
    let lm = |x: f64, y: f64| Landmark { x, y, visibility };
    let mut pose: PoseLandmarks = (0..duotrack_pose_model::LANDMARK_COUNT)
        .map(|_| lm(center_x, 0.3))
        .collect();

    pose.set(body::NOSE, lm(center_x, 0.1));
    pose.set(body::LEFT_SHOULDER, lm(center_x - 0.08, 0.25));
    pose.set(body::RIGHT_SHOULDER, lm(center_x + 0.08, 0.25));
    pose.set(body::LEFT_HIP, lm(center_x - 0.05, 0.5));
    pose.set(body::RIGHT_HIP, lm(center_x + 0.05, 0.5));
    pose.set(body::LEFT_KNEE, lm(center_x - 0.05, 0.7));
    pose.set(body::RIGHT_KNEE, lm(center_x + 0.05, 0.7));
    pose.set(body::LEFT_ANKLE, lm(center_x - 0.05, 0.9));
    pose.set(body::RIGHT_ANKLE, lm(center_x + 0.05, 0.9));
    pose
}
