//! Exercise repetition detection.
//!
//! Each exercise is a small hysteresis state machine over one subject's
//! landmarks. The detector itself only holds thresholds; everything that
//! changes between frames lives in an [`ExerciseRuntime`] owned by the
//! caller, one per tracked subject, so two people never share leg flags or
//! debounce timestamps.
//!
//! # High knees
//!
//! Each leg is tracked independently. A knee counts when its lift ratio
//! `(hip.y - knee.y) / |hip - ankle|` crosses the up threshold, and re-arms
//! once it drops below the down ratio. The up threshold relaxes (down to
//! 70% of nominal) as time since the last count grows.
//!
//! # Side slide
//!
//! The hip center moves through `center -> left|right -> center`. Outward
//! moves count; the return to center only re-arms. The return band is
//! narrower than the outward thresholds, leaving a dead zone in between.

use std::fmt;
use std::str::FromStr;

use duotrack_common::clock::{elapsed_since, TimestampMs};
use duotrack_common::config::{AppConfig, HighKneesDefaults, SideSlideDefaults};
use duotrack_common::error::DuotrackError;
use duotrack_pose_model::landmark::{body, Point2, PoseLandmarks};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::feedback;
use crate::geometry::{BodyMetrics, MIN_LANDMARKS_FOR_LEGS};

/// Leg lengths at or below this are treated as degenerate.
const MIN_LEG_LENGTH: f64 = 1e-6;

/// Supported exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    HighKnees,
    SideSlide,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 2] = [ExerciseKind::HighKnees, ExerciseKind::SideSlide];

    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseKind::HighKnees => "high_knees",
            ExerciseKind::SideSlide => "side_slide",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseKind {
    type Err = DuotrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "high_knees" => Ok(ExerciseKind::HighKnees),
            "side_slide" => Ok(ExerciseKind::SideSlide),
            _ => Err(DuotrackError::unknown_exercise(s)),
        }
    }
}

/// Logical pose state the caller keeps per subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionState {
    #[default]
    Idle,
    Down,
    UpLeft,
    UpRight,
    Center,
    Left,
    Right,
}

impl MotionState {
    pub fn as_str(self) -> &'static str {
        match self {
            MotionState::Idle => "idle",
            MotionState::Down => "down",
            MotionState::UpLeft => "up_left",
            MotionState::UpRight => "up_right",
            MotionState::Center => "center",
            MotionState::Left => "left",
            MotionState::Right => "right",
        }
    }

    pub fn is_up(self) -> bool {
        matches!(self, MotionState::UpLeft | MotionState::UpRight)
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotionState {
    type Err = DuotrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(MotionState::Idle),
            "down" => Ok(MotionState::Down),
            "up_left" => Ok(MotionState::UpLeft),
            "up_right" => Ok(MotionState::UpRight),
            "center" => Ok(MotionState::Center),
            "left" => Ok(MotionState::Left),
            "right" => Ok(MotionState::Right),
            other => Err(DuotrackError::unknown_pose_state(other)),
        }
    }
}

/// High-knees thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighKneesConfig {
    pub up_ratio: f64,
    pub down_ratio: f64,
    pub min_interval_ms: TimestampMs,
    pub speed_compensation: f64,
    /// Floor for the threshold relaxation factor.
    pub min_speed_factor: f64,
}

impl From<&HighKneesDefaults> for HighKneesConfig {
    fn from(d: &HighKneesDefaults) -> Self {
        Self {
            up_ratio: d.up_ratio,
            down_ratio: d.down_ratio,
            min_interval_ms: d.min_interval_ms,
            speed_compensation: d.speed_compensation,
            min_speed_factor: 0.7,
        }
    }
}

impl Default for HighKneesConfig {
    fn default() -> Self {
        Self::from(&HighKneesDefaults::default())
    }
}

impl HighKneesConfig {
    /// Up threshold after relaxing for time since the last count.
    pub fn dynamic_up_ratio(&self, since_last_count_ms: TimestampMs) -> f64 {
        let secs = since_last_count_ms as f64 / 1000.0;
        let speed_factor = (1.0 - secs * self.speed_compensation).max(self.min_speed_factor);
        self.up_ratio * speed_factor
    }
}

/// Side-slide thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideSlideConfig {
    pub left_threshold: f64,
    pub right_threshold: f64,
    pub center_min: f64,
    pub center_max: f64,
    pub min_interval_ms: TimestampMs,
}

impl From<&SideSlideDefaults> for SideSlideConfig {
    fn from(d: &SideSlideDefaults) -> Self {
        Self {
            left_threshold: d.left_threshold,
            right_threshold: d.right_threshold,
            center_min: d.center_min,
            center_max: d.center_max,
            min_interval_ms: d.min_interval_ms,
        }
    }
}

impl Default for SideSlideConfig {
    fn default() -> Self {
        Self::from(&SideSlideDefaults::default())
    }
}

/// Thresholds for every exercise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseConfig {
    pub high_knees: HighKneesConfig,
    pub side_slide: SideSlideConfig,
}

impl From<&AppConfig> for ExerciseConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            high_knees: HighKneesConfig::from(&config.high_knees),
            side_slide: SideSlideConfig::from(&config.side_slide),
        }
    }
}

/// One leg's debounce state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegState {
    pub up: bool,
    pub last_count_ms: Option<TimestampMs>,
}

/// Per-subject high-knees state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighKneesRuntime {
    pub left: LegState,
    pub right: LegState,
}

/// Lateral position class for side slides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LateralState {
    #[default]
    Center,
    Left,
    Right,
}

impl From<LateralState> for MotionState {
    fn from(state: LateralState) -> Self {
        match state {
            LateralState::Center => MotionState::Center,
            LateralState::Left => MotionState::Left,
            LateralState::Right => MotionState::Right,
        }
    }
}

/// Per-subject side-slide state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSlideRuntime {
    pub state: LateralState,
    pub last_move_ms: Option<TimestampMs>,
}

/// Everything a subject's detectors remember between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRuntime {
    pub high_knees: HighKneesRuntime,
    pub side_slide: SideSlideRuntime,
}

impl ExerciseRuntime {
    /// Restore one exercise's state to its initial values.
    pub fn reset(&mut self, kind: ExerciseKind) {
        match kind {
            ExerciseKind::HighKnees => self.high_knees = HighKneesRuntime::default(),
            ExerciseKind::SideSlide => self.side_slide = SideSlideRuntime::default(),
        }
    }

    pub fn reset_all(&mut self) {
        *self = Self::default();
    }
}

/// One frame's signal for one subject.
#[derive(Debug, Clone, Copy)]
pub struct MotionSample<'a> {
    pub landmarks: &'a PoseLandmarks,
    pub metrics: BodyMetrics,
    /// The caller's current logical state for this subject.
    pub state: MotionState,
    pub now_ms: TimestampMs,
}

/// Outcome of one detector call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Detection {
    /// A repetition was completed on this frame.
    pub detected: bool,
    pub new_state: MotionState,
    /// Encouragement phrase, present only with a detection.
    pub feedback: Option<&'static str>,
}

impl Detection {
    fn unchanged(state: MotionState) -> Self {
        Self {
            detected: false,
            new_state: state,
            feedback: None,
        }
    }
}

/// Converts a subject's landmarks into debounced repetition events.
#[derive(Debug, Clone, Default)]
pub struct ExerciseDetector {
    config: ExerciseConfig,
}

impl ExerciseDetector {
    pub fn new(config: ExerciseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExerciseConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ExerciseConfig {
        &mut self.config
    }

    /// Run `kind`'s state machine for one subject on one frame.
    ///
    /// Poses that do not reach the ankles leave everything untouched.
    pub fn detect<R: Rng + ?Sized>(
        &self,
        kind: ExerciseKind,
        runtime: &mut ExerciseRuntime,
        sample: &MotionSample<'_>,
        rng: &mut R,
    ) -> Detection {
        if !sample.landmarks.covers(MIN_LANDMARKS_FOR_LEGS) {
            return Detection::unchanged(sample.state);
        }
        match kind {
            ExerciseKind::HighKnees => self.detect_high_knees(&mut runtime.high_knees, sample, rng),
            ExerciseKind::SideSlide => self.detect_side_slide(&mut runtime.side_slide, sample, rng),
        }
    }

    fn detect_high_knees<R: Rng + ?Sized>(
        &self,
        runtime: &mut HighKneesRuntime,
        sample: &MotionSample<'_>,
        rng: &mut R,
    ) -> Detection {
        let config = &self.config.high_knees;
        let now = sample.now_ms;
        let lm = sample.landmarks;

        let (Some(left_ratio), Some(right_ratio)) = (
            lift_ratio(lm, body::LEFT_HIP, body::LEFT_KNEE, body::LEFT_ANKLE, &sample.metrics),
            lift_ratio(lm, body::RIGHT_HIP, body::RIGHT_KNEE, body::RIGHT_ANKLE, &sample.metrics),
        ) else {
            return Detection::unchanged(sample.state);
        };

        let since_last = elapsed_since(now, runtime.left.last_count_ms)
            .min(elapsed_since(now, runtime.right.last_count_ms));
        let up_threshold = config.dynamic_up_ratio(since_last);

        let mut result = Detection::unchanged(sample.state);
        let legs = [
            (&mut runtime.left, left_ratio, MotionState::UpLeft),
            (&mut runtime.right, right_ratio, MotionState::UpRight),
        ];
        for (leg, ratio, up_state) in legs {
            if !leg.up && ratio > up_threshold {
                if elapsed_since(now, leg.last_count_ms) > config.min_interval_ms {
                    leg.up = true;
                    leg.last_count_ms = Some(now);
                    result.detected = true;
                    result.new_state = up_state;
                    result.feedback = Some(feedback::pick(ExerciseKind::HighKnees, rng));
                }
            } else if leg.up && ratio < config.down_ratio {
                leg.up = false;
            }
        }

        if !runtime.left.up && !runtime.right.up && result.new_state.is_up() {
            result.new_state = MotionState::Down;
        }
        result
    }

    fn detect_side_slide<R: Rng + ?Sized>(
        &self,
        runtime: &mut SideSlideRuntime,
        sample: &MotionSample<'_>,
        rng: &mut R,
    ) -> Detection {
        let config = &self.config.side_slide;
        let now = sample.now_ms;

        let (Some(left_hip), Some(right_hip)) = (
            sample.landmarks.point(body::LEFT_HIP),
            sample.landmarks.point(body::RIGHT_HIP),
        ) else {
            return Detection::unchanged(sample.state);
        };
        let hip_x = Point2::midpoint(&left_hip, &right_hip).x;

        let mut detected = false;
        match runtime.state {
            LateralState::Center => {
                let rested = elapsed_since(now, runtime.last_move_ms) > config.min_interval_ms;
                let target = if hip_x < config.left_threshold {
                    Some(LateralState::Left)
                } else if hip_x > config.right_threshold {
                    Some(LateralState::Right)
                } else {
                    None
                };
                if let Some(target) = target.filter(|_| rested) {
                    runtime.state = target;
                    runtime.last_move_ms = Some(now);
                    detected = true;
                }
            }
            LateralState::Left | LateralState::Right => {
                if hip_x > config.center_min && hip_x < config.center_max {
                    runtime.state = LateralState::Center;
                }
            }
        }

        Detection {
            detected,
            new_state: runtime.state.into(),
            feedback: detected.then(|| feedback::pick(ExerciseKind::SideSlide, rng)),
        }
    }
}

/// Knee rise above the hip, normalized by that leg's hip-to-ankle length.
///
/// Falls back to the body metrics' leg length when the measured leg is
/// degenerate.
fn lift_ratio(
    landmarks: &PoseLandmarks,
    hip: usize,
    knee: usize,
    ankle: usize,
    metrics: &BodyMetrics,
) -> Option<f64> {
    let hip = landmarks.point(hip)?;
    let knee = landmarks.point(knee)?;
    let ankle = landmarks.point(ankle)?;

    let mut leg_length = hip.distance(&ankle);
    if leg_length <= MIN_LEG_LENGTH {
        leg_length = metrics.leg_length;
    }
    if leg_length <= MIN_LEG_LENGTH {
        return Some(0.0);
    }
    Some((hip.y - knee.y) / leg_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::standing_pose;
    use duotrack_pose_model::landmark::Landmark;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Standing pose (hips 0.5, ankles 0.9) with explicit knee heights.
    fn knees_at(left_y: f64, right_y: f64) -> PoseLandmarks {
        let mut pose = standing_pose(0.5, Some(0.9));
        pose.set(body::LEFT_KNEE, Landmark::new(0.45, left_y));
        pose.set(body::RIGHT_KNEE, Landmark::new(0.55, right_y));
        pose
    }

    /// Knee height giving the requested lift ratio on a 0.4 leg.
    fn knee_for_ratio(ratio: f64) -> f64 {
        0.5 - ratio * 0.4
    }

    const DOWN: f64 = 0.7;
    const UP: f64 = 0.4;

    struct Harness {
        detector: ExerciseDetector,
        runtime: ExerciseRuntime,
        state: MotionState,
        rng: StdRng,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                detector: ExerciseDetector::default(),
                runtime: ExerciseRuntime::default(),
                state: MotionState::Idle,
                rng: StdRng::seed_from_u64(1),
            }
        }

        fn step(&mut self, kind: ExerciseKind, pose: &PoseLandmarks, now_ms: u64) -> Detection {
            let sample = MotionSample {
                landmarks: pose,
                metrics: BodyMetrics::from_landmarks(pose),
                state: self.state,
                now_ms,
            };
            let result = self
                .detector
                .detect(kind, &mut self.runtime, &sample, &mut self.rng);
            self.state = result.new_state;
            result
        }

        fn knees(&mut self, left_y: f64, right_y: f64, now_ms: u64) -> Detection {
            self.step(ExerciseKind::HighKnees, &knees_at(left_y, right_y), now_ms)
        }

        fn slide(&mut self, hip_x: f64, now_ms: u64) -> Detection {
            self.step(ExerciseKind::SideSlide, &standing_pose(hip_x, Some(0.9)), now_ms)
        }
    }

    #[test]
    fn test_short_pose_is_ignored() {
        let mut h = Harness::new();
        h.state = MotionState::UpLeft;
        let pose = PoseLandmarks::new(vec![Landmark::new(0.5, 0.5); 28]);
        let result = h.step(ExerciseKind::HighKnees, &pose, 1_000);
        assert_eq!(result, Detection::unchanged(MotionState::UpLeft));
        assert_eq!(h.runtime, ExerciseRuntime::default());
    }

    #[test]
    fn test_left_knee_lift_counts_once() {
        let mut h = Harness::new();
        let result = h.knees(UP, DOWN, 1_000);
        assert!(result.detected);
        assert_eq!(result.new_state, MotionState::UpLeft);
        let phrase = result.feedback.expect("feedback");
        assert!(feedback::phrases(ExerciseKind::HighKnees).contains(&phrase));

        // Holding the knee up is not another repetition.
        let result = h.knees(UP, DOWN, 1_500);
        assert!(!result.detected);
        assert_eq!(result.feedback, None);
    }

    #[test]
    fn test_high_knees_debounce() {
        let mut h = Harness::new();

        let first = h.knees(UP, DOWN, 1_000);
        assert!(first.detected);
        assert_eq!(first.new_state, MotionState::UpLeft);

        let dropped = h.knees(DOWN, DOWN, 1_030);
        assert!(!dropped.detected);
        assert_eq!(dropped.new_state, MotionState::Down);
        assert!(!h.runtime.high_knees.left.up);

        // Back up 80ms after the count: inside the 150ms window.
        let bounced = h.knees(UP, DOWN, 1_080);
        assert!(!bounced.detected);
        assert_eq!(bounced.new_state, MotionState::Down);

        let second = h.knees(UP, DOWN, 1_200);
        assert!(second.detected);
        assert_eq!(second.new_state, MotionState::UpLeft);
        assert_eq!(h.runtime.high_knees.left.last_count_ms, Some(1_200));
    }

    #[test]
    fn test_both_knees_in_one_frame_report_right() {
        let mut h = Harness::new();
        let result = h.knees(UP, UP, 1_000);
        assert!(result.detected);
        assert_eq!(result.new_state, MotionState::UpRight);
        assert!(h.runtime.high_knees.left.up);
        assert!(h.runtime.high_knees.right.up);
    }

    #[test]
    fn test_legs_are_independent() {
        let mut h = Harness::new();
        assert!(h.knees(UP, DOWN, 1_000).detected);
        // Right leg has its own debounce, so 50ms later it still counts.
        let result = h.knees(UP, UP, 1_050);
        assert!(result.detected);
        assert_eq!(result.new_state, MotionState::UpRight);
    }

    #[test]
    fn test_threshold_relaxes_with_time_since_last_count() {
        let marginal = knee_for_ratio(0.12);

        let mut h = Harness::new();
        h.runtime.high_knees.right.last_count_ms = Some(1_000);
        // 160ms since last count: threshold ~0.148.
        assert!(!h.knees(marginal, DOWN, 1_160).detected);
        // 4s since last count: threshold floors at 0.105.
        assert!(h.knees(marginal, DOWN, 5_000).detected);
    }

    #[test]
    fn test_dynamic_up_ratio_bounds() {
        let config = HighKneesConfig::default();
        assert!((config.dynamic_up_ratio(0) - 0.15).abs() < 1e-12);
        assert!((config.dynamic_up_ratio(1_000) - 0.135).abs() < 1e-12);
        assert!((config.dynamic_up_ratio(u64::MAX) - 0.105).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_leg_uses_body_metrics() {
        let mut pose = knees_at(0.45, DOWN);
        // Left ankle collapsed onto the hip.
        pose.set(body::LEFT_ANKLE, Landmark::new(0.45, 0.5));
        let sample = MotionSample {
            landmarks: &pose,
            metrics: BodyMetrics {
                leg_length: 0.2,
                ..BodyMetrics::default()
            },
            state: MotionState::Idle,
            now_ms: 1_000,
        };
        let mut runtime = ExerciseRuntime::default();
        let mut rng = StdRng::seed_from_u64(3);
        // (0.5 - 0.45) / 0.2 = 0.25
        let result = ExerciseDetector::default().detect(
            ExerciseKind::HighKnees,
            &mut runtime,
            &sample,
            &mut rng,
        );
        assert!(result.detected);
        assert_eq!(result.new_state, MotionState::UpLeft);
    }

    #[test]
    fn test_side_slide_hysteresis_sequence() {
        let mut h = Harness::new();
        let xs = [0.5, 0.3, 0.3, 0.48, 0.3];
        let results: Vec<Detection> = xs
            .iter()
            .enumerate()
            .map(|(i, &x)| h.slide(x, 1_000 * (i as u64 + 1)))
            .collect();

        let states: Vec<MotionState> = results.iter().map(|r| r.new_state).collect();
        assert_eq!(
            states,
            vec![
                MotionState::Center,
                MotionState::Left,
                MotionState::Left,
                MotionState::Center,
                MotionState::Left,
            ]
        );
        let detected: Vec<bool> = results.iter().map(|r| r.detected).collect();
        assert_eq!(detected, vec![false, true, false, false, true]);
        assert!(results[1].feedback.is_some());
        assert!(results[3].feedback.is_none());
    }

    #[test]
    fn test_side_slide_right_and_dead_zone() {
        let mut h = Harness::new();
        assert_eq!(h.slide(0.7, 1_000).new_state, MotionState::Right);
        // Between 0.55 and 0.65: neither outward nor back in the center band.
        assert_eq!(h.slide(0.6, 2_000).new_state, MotionState::Right);
        assert_eq!(h.slide(0.5, 3_000).new_state, MotionState::Center);
    }

    #[test]
    fn test_side_slide_debounce() {
        let mut h = Harness::new();
        assert!(h.slide(0.3, 1_000).detected);
        assert_eq!(h.slide(0.5, 1_100).new_state, MotionState::Center);
        // Out again 200ms after the last move: too soon.
        let result = h.slide(0.7, 1_200);
        assert!(!result.detected);
        assert_eq!(result.new_state, MotionState::Center);
        assert!(h.slide(0.7, 1_400).detected);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut h = Harness::new();
        h.knees(UP, UP, 1_000);
        h.slide(0.3, 1_000);

        h.runtime.reset(ExerciseKind::HighKnees);
        let once = h.runtime;
        h.runtime.reset(ExerciseKind::HighKnees);
        assert_eq!(h.runtime, once);
        assert_eq!(h.runtime.high_knees, HighKneesRuntime::default());
        // Side-slide state is left alone by a high-knees reset.
        assert_eq!(h.runtime.side_slide.state, LateralState::Left);

        h.runtime.reset(ExerciseKind::SideSlide);
        assert_eq!(h.runtime, ExerciseRuntime::default());

        // No stale timestamp: a marginal lift counts right away at the relaxed threshold.
        assert!(h.knees(knee_for_ratio(0.12), DOWN, 1_010).detected);
    }

    #[test]
    fn test_state_tokens_roundtrip() {
        for token in ["idle", "down", "up_left", "up_right", "center", "left", "right"] {
            let state: MotionState = token.parse().unwrap();
            assert_eq!(state.to_string(), token);
        }
        assert!("sideways".parse::<MotionState>().is_err());
        assert_eq!(
            serde_json::to_string(&MotionState::UpLeft).unwrap(),
            "\"up_left\""
        );
    }

    #[test]
    fn test_exercise_kind_parsing() {
        assert_eq!("high-knees".parse::<ExerciseKind>().unwrap(), ExerciseKind::HighKnees);
        assert_eq!("SIDE_SLIDE".parse::<ExerciseKind>().unwrap(), ExerciseKind::SideSlide);
        let err = "burpees".parse::<ExerciseKind>().unwrap_err();
        assert!(matches!(err, DuotrackError::UnknownExercise { .. }));
    }

    #[test]
    fn test_config_from_app_config() {
        let mut app = AppConfig::default();
        app.side_slide.min_interval_ms = 100;
        let config = ExerciseConfig::from(&app);
        assert_eq!(config.side_slide.min_interval_ms, 100);
        assert_eq!(config.high_knees, HighKneesConfig::default());
    }
}
