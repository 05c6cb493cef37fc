//! Session clock for frame timestamps.
//!
//! Detector debouncing works on millisecond timestamps relative to a
//! monotonic epoch recorded when the session starts. Replayed streams
//! carry their own timestamps and bypass the clock entirely.

use std::time::Instant;

/// Monotonic millisecond timestamp since session start.
pub type TimestampMs = u64;

/// A session clock that provides monotonic timestamps relative to
/// a fixed epoch (the moment the session started).
#[derive(Debug, Clone)]
pub struct SessionClock {
    /// The instant the session started.
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string).
    epoch_wall: String,
}

impl SessionClock {
    /// Create a new clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Milliseconds elapsed since session start.
    pub fn elapsed_ms(&self) -> TimestampMs {
        self.epoch.elapsed().as_millis() as TimestampMs
    }

    /// Wall-clock time at session start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// Re-anchor the clock to now.
    pub fn restart(&mut self) {
        *self = Self::start();
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}

/// Milliseconds from `last` to `now`; a missing `last` is infinitely old.
///
/// Saturates at zero if `now` precedes `last` (out-of-order frames).
pub fn elapsed_since(now: TimestampMs, last: Option<TimestampMs>) -> TimestampMs {
    match last {
        Some(last) => now.saturating_sub(last),
        None => TimestampMs::MAX,
    }
}
