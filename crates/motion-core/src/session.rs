//! Per-frame driver for a two-person exercise session.
//!
//! Runs the tracker on each frame, then the detector once per visible slot
//! with that slot's own runtime state, and keeps a repetition counter per
//! slot. Detector state never crosses between subjects.

use duotrack_common::clock::{SessionClock, TimestampMs};
use duotrack_common::config::AppConfig;
use duotrack_pose_model::frame::PoseFrame;
use duotrack_pose_model::landmark::PoseLandmarks;
use rand::Rng;
use serde::Serialize;

use crate::exercise::{
    ExerciseConfig, ExerciseDetector, ExerciseKind, ExerciseRuntime, MotionSample, MotionState,
};
use crate::geometry::BodyMetrics;
use crate::slot::{Slot, SlotPair};
use crate::tracker::{IdentityTracker, TrackedIdentity, TrackerConfig, TrackerStats};

/// What the session remembers about one subject.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectState {
    pub runtime: ExerciseRuntime,
    pub pose_state: MotionState,
    pub metrics: BodyMetrics,
    pub count: u32,
}

impl SubjectState {
    fn rearm(&mut self) {
        self.runtime.reset_all();
        self.pose_state = MotionState::Idle;
    }
}

/// A counted repetition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepEvent {
    pub slot: Slot,
    pub exercise: ExerciseKind,
    /// The slot's running count including this repetition.
    pub count: u32,
    pub state: MotionState,
    pub feedback: &'static str,
    pub timestamp_ms: TimestampMs,
}

/// Result of feeding one frame.
#[derive(Debug, Clone)]
pub struct FrameOutcome {
    pub tracked: SlotPair<TrackedIdentity>,
    pub events: Vec<RepEvent>,
}

/// Tracker, detector, and per-slot counters for one session.
///
/// Sessions start in training mode; while stopped, subjects are still
/// tracked but nothing is counted.
#[derive(Debug)]
pub struct DualSession {
    tracker: IdentityTracker,
    detector: ExerciseDetector,
    exercise: ExerciseKind,
    training: bool,
    subjects: SlotPair<SubjectState>,
    clock: SessionClock,
}

impl DualSession {
    pub fn new(
        tracker_config: TrackerConfig,
        exercise_config: ExerciseConfig,
        exercise: ExerciseKind,
    ) -> Self {
        Self {
            tracker: IdentityTracker::new(tracker_config),
            detector: ExerciseDetector::new(exercise_config),
            exercise,
            training: true,
            subjects: SlotPair::default(),
            clock: SessionClock::start(),
        }
    }

    pub fn from_app_config(config: &AppConfig, exercise: ExerciseKind) -> Self {
        Self::new(
            TrackerConfig::from(&config.tracking),
            ExerciseConfig::from(config),
            exercise,
        )
    }

    pub fn with_defaults(exercise: ExerciseKind) -> Self {
        Self::new(TrackerConfig::default(), ExerciseConfig::default(), exercise)
    }

    /// Feed a live frame, stamped with the session clock.
    pub fn process<R: Rng + ?Sized>(
        &mut self,
        people: Vec<PoseLandmarks>,
        rng: &mut R,
    ) -> FrameOutcome {
        let now = self.clock.elapsed_ms();
        self.process_at(people, now, rng)
    }

    /// Feed a recorded frame using its own timestamp.
    pub fn process_frame<R: Rng + ?Sized>(&mut self, frame: &PoseFrame, rng: &mut R) -> FrameOutcome {
        self.process_at(frame.people.clone(), frame.timestamp_ms, rng)
    }

    /// Feed one frame observed at `now_ms`.
    pub fn process_at<R: Rng + ?Sized>(
        &mut self,
        people: Vec<PoseLandmarks>,
        now_ms: TimestampMs,
        rng: &mut R,
    ) -> FrameOutcome {
        let tracked = self.tracker.track(people);
        let mut events = Vec::new();

        for (slot, identity) in tracked.iter() {
            let Some(landmarks) = identity.landmarks.as_ref() else {
                continue;
            };
            let subject = &mut self.subjects[slot];
            subject.metrics = BodyMetrics::from_landmarks(landmarks);

            if !self.training {
                continue;
            }

            let sample = MotionSample {
                landmarks,
                metrics: subject.metrics,
                state: subject.pose_state,
                now_ms,
            };
            let result = self
                .detector
                .detect(self.exercise, &mut subject.runtime, &sample, rng);
            subject.pose_state = result.new_state;

            if result.detected {
                subject.count += 1;
                let event = RepEvent {
                    slot,
                    exercise: self.exercise,
                    count: subject.count,
                    state: result.new_state,
                    feedback: result.feedback.unwrap_or_default(),
                    timestamp_ms: now_ms,
                };
                tracing::info!(
                    slot = %event.slot,
                    exercise = %event.exercise,
                    count = event.count,
                    state = %event.state,
                    "repetition"
                );
                events.push(event);
            }
        }

        FrameOutcome { tracked, events }
    }

    /// Switch exercise; every subject's detector state starts over.
    pub fn set_exercise(&mut self, exercise: ExerciseKind) {
        self.exercise = exercise;
        for slot in Slot::ALL {
            self.subjects[slot].rearm();
        }
        tracing::debug!(%exercise, "exercise changed");
    }

    pub fn exercise(&self) -> ExerciseKind {
        self.exercise
    }

    pub fn start_training(&mut self) {
        self.training = true;
        for slot in Slot::ALL {
            self.subjects[slot].pose_state = MotionState::Idle;
        }
    }

    pub fn stop_training(&mut self) {
        self.training = false;
    }

    pub fn is_training(&self) -> bool {
        self.training
    }

    pub fn reset_counts(&mut self) {
        for slot in Slot::ALL {
            self.subjects[slot].count = 0;
        }
    }

    pub fn counts(&self) -> SlotPair<u32> {
        self.subjects.map(|_, s| s.count)
    }

    pub fn subject(&self, slot: Slot) -> &SubjectState {
        &self.subjects[slot]
    }

    pub fn tracker(&self) -> &IdentityTracker {
        &self.tracker
    }

    pub fn tracker_stats(&self) -> TrackerStats {
        self.tracker.stats()
    }

    pub fn detector_mut(&mut self) -> &mut ExerciseDetector {
        &mut self.detector
    }

    /// Forget tracks, detector state and counts; restart the clock.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.subjects = SlotPair::default();
        self.clock.restart();
    }
}
