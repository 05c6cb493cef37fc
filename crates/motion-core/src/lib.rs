//! Duotrack Motion Core
//!
//! Turns per-frame pose detections into stable subjects and counted reps:
//! - **Identity tracking:** Resolve unordered detections to persistent left/right slots
//! - **Exercise detection:** Debounced state machines for high knees and side slides
//! - **Session driving:** Glue that runs both per frame and keeps per-slot counters
//!
//! This crate is pure computation: no I/O, no platform dependencies.
//! Randomness (feedback phrases) is injected by the caller.

pub mod exercise;
pub mod feedback;
pub mod geometry;
pub mod session;
pub mod slot;
pub mod tracker;

pub use exercise::{Detection, ExerciseDetector, ExerciseKind, ExerciseRuntime, MotionState};
pub use session::{DualSession, FrameOutcome, RepEvent, SubjectState};
pub use slot::{Slot, SlotPair};
pub use tracker::{IdentityTracker, TrackedIdentity, TrackerConfig};
