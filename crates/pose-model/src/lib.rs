//! Duotrack Pose Model
//!
//! Defines the core data contracts shared by the tracker and detectors:
//! - **Landmarks:** Normalized skeletal joints with optional visibility
//! - **Frames:** Timestamped per-frame detections, stored as JSONL
//!
//! All coordinates are normalized to `[0.0, 1.0]` relative to the source
//! image so detections survive resolution changes.

pub mod frame;
pub mod landmark;

pub use frame::*;
pub use landmark::*;
