//! Dual identity tracking.
//!
//! Resolves each frame's unordered pose detections to two persistent
//! identities, `left` and `right`, that survive crossing, occlusion and
//! short dropouts.
//!
//! # Algorithm
//!
//! 1. **Sort** observations by hip-center x.
//! 2. **Initialize** when either slot has no position yet: split by order,
//!    or by the image midline for a lone subject.
//! 3. **Match** otherwise: a lone subject goes to the nearer slot; a pair is
//!    kept in order unless swapping is markedly cheaper (hysteresis).
//! 4. **Age** slots that were not matched; slots lost beyond tolerance are
//!    hidden from callers and cleared on the next empty frame.

use std::collections::VecDeque;

use duotrack_common::config::TrackingDefaults;
use duotrack_pose_model::landmark::{Point2, PoseLandmarks};
use serde::{Deserialize, Serialize};

use crate::geometry::{center_of, confidence_of};
use crate::slot::{Slot, SlotPair};

/// Tunables for the identity tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Matched displacement above which a move is counted as large.
    pub position_threshold: f64,

    /// Consecutive unmatched frames tolerated before a slot is lost.
    pub max_lost_frames: u32,

    /// EMA weight of the incoming center (0.3 keeps 70% of the old position).
    pub smooth_factor: f64,

    /// Keypoint confidence below which a detection is considered weak.
    ///
    /// Exposed for callers; the tracker itself tracks every observation,
    /// weak or not, so partly occluded subjects keep their identity.
    pub min_confidence: f64,

    /// A swap must cost less than this fraction of keeping the order.
    pub swap_cost_ratio: f64,

    /// Number of raw centers retained per slot.
    pub history_len: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::from(&TrackingDefaults::default())
    }
}

impl From<&TrackingDefaults> for TrackerConfig {
    fn from(defaults: &TrackingDefaults) -> Self {
        Self {
            position_threshold: defaults.position_threshold,
            max_lost_frames: defaults.max_lost_frames,
            smooth_factor: defaults.smooth_factor,
            min_confidence: defaults.min_confidence,
            swap_cost_ratio: 0.7,
            history_len: 10,
        }
    }
}

/// One detected subject in the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonObservation {
    pub landmarks: PoseLandmarks,
    /// Hip midpoint, origin when hips are missing.
    pub center: Point2,
    pub confidence: f64,
}

impl PersonObservation {
    pub fn new(landmarks: PoseLandmarks) -> Self {
        let center = center_of(&landmarks);
        let confidence = confidence_of(&landmarks);
        Self {
            landmarks,
            center,
            confidence,
        }
    }
}

/// A persistent tracking slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedIdentity {
    pub slot: Slot,
    /// Last assigned pose; `None` while unmatched beyond tolerance.
    pub landmarks: Option<PoseLandmarks>,
    /// Exponentially smoothed center.
    pub position: Option<Point2>,
    /// Most recent raw centers, oldest first.
    pub history: VecDeque<Point2>,
    pub lost_frames: u32,
}

impl TrackedIdentity {
    pub fn new(slot: Slot) -> Self {
        Self {
            slot,
            landmarks: None,
            position: None,
            history: VecDeque::new(),
            lost_frames: 0,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.position.is_some()
    }

    pub fn is_lost(&self, max_lost_frames: u32) -> bool {
        self.lost_frames > max_lost_frames
    }

    /// Copy of this slot as callers should see it.
    fn reported(&self, max_lost_frames: u32) -> TrackedIdentity {
        let mut view = self.clone();
        if self.is_lost(max_lost_frames) {
            view.landmarks = None;
        }
        view
    }

    /// Take an observation as-is, discarding previous motion.
    fn seed(&mut self, obs: PersonObservation) {
        self.position = Some(obs.center);
        self.history.clear();
        self.history.push_back(obs.center);
        self.landmarks = Some(obs.landmarks);
        self.lost_frames = 0;
    }

    /// Blend an observation into the running track.
    fn absorb(&mut self, obs: PersonObservation, config: &TrackerConfig) {
        let incoming = obs.center;
        self.position = Some(match self.position {
            Some(old) => old.lerp(&incoming, config.smooth_factor),
            None => incoming,
        });
        while self.history.len() >= config.history_len.max(1) {
            self.history.pop_front();
        }
        self.history.push_back(incoming);
        self.landmarks = Some(obs.landmarks);
        self.lost_frames = 0;
    }

    fn clear(&mut self) {
        self.landmarks = None;
        self.position = None;
    }
}

/// Running counters for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerStats {
    /// Frames in which the pair assignment was swapped.
    pub swaps: u64,
    /// Frames with no usable detection.
    pub no_detection_frames: u64,
    /// Slots matched again after being lost beyond tolerance.
    pub recoveries: u64,
    /// Matches that jumped farther than the position threshold.
    pub large_moves: u64,
}

/// Distance of a prior position to an observation; missing priors are infinitely far.
pub fn prior_distance(prior: Option<Point2>, center: &Point2) -> f64 {
    prior.map_or(f64::INFINITY, |p| p.distance(center))
}

/// Cost of every `(slot, observation)` pairing, rows indexed by slot.
pub fn cost_matrix(priors: &[Option<Point2>], centers: &[Point2]) -> Vec<Vec<f64>> {
    priors
        .iter()
        .map(|prior| centers.iter().map(|c| prior_distance(*prior, c)).collect())
        .collect()
}

/// Total cost of giving slot `i` observation `assignment[i]`.
pub fn assignment_cost(costs: &[Vec<f64>], assignment: &[usize]) -> f64 {
    assignment
        .iter()
        .enumerate()
        .map(|(slot, &obs)| costs[slot][obs])
        .sum()
}

/// Pick between the natural (sorted) assignment and an alternative.
///
/// The alternative wins only when it is cheaper than `ratio` times the
/// natural cost, so near-ties never flip identities.
pub fn prefer_alternative(
    costs: &[Vec<f64>],
    natural: &[usize],
    alternative: &[usize],
    ratio: f64,
) -> bool {
    assignment_cost(costs, alternative) < assignment_cost(costs, natural) * ratio
}

/// Keeps two subjects' identities stable across frames.
///
/// Not reentrant: frames must be fed one at a time, in order.
#[derive(Debug, Clone)]
pub struct IdentityTracker {
    config: TrackerConfig,
    identities: SlotPair<TrackedIdentity>,
    stats: TrackerStats,
}

impl IdentityTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            identities: SlotPair::new(
                TrackedIdentity::new(Slot::Left),
                TrackedIdentity::new(Slot::Right),
            ),
            stats: TrackerStats::default(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(TrackerConfig::default())
    }

    /// Feed one frame of raw detections and return both slots.
    pub fn track(&mut self, people: Vec<PoseLandmarks>) -> SlotPair<TrackedIdentity> {
        let observations = people.into_iter().map(PersonObservation::new).collect();
        self.track_observations(observations)
    }

    /// Feed one frame of prepared observations and return both slots.
    pub fn track_observations(
        &mut self,
        mut observations: Vec<PersonObservation>,
    ) -> SlotPair<TrackedIdentity> {
        if observations.is_empty() {
            self.handle_no_detection();
            return self.current();
        }

        observations.sort_by(|a, b| a.center.x.total_cmp(&b.center.x));

        let initialized =
            self.identities.left.is_initialized() && self.identities.right.is_initialized();
        if !initialized {
            self.initialize(observations);
        } else if observations.len() == 1 {
            if let Some(obs) = observations.pop() {
                self.match_single(obs);
            }
        } else {
            observations.truncate(2);
            self.match_pair(observations);
        }

        self.current()
    }

    /// Both slots as callers should see them.
    pub fn current(&self) -> SlotPair<TrackedIdentity> {
        let max = self.config.max_lost_frames;
        self.identities.map(|_, identity| identity.reported(max))
    }

    /// Internal slot state, including positions of lost identities.
    pub fn identity(&self, slot: Slot) -> &TrackedIdentity {
        &self.identities[slot]
    }

    pub fn stats(&self) -> TrackerStats {
        self.stats
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut TrackerConfig {
        &mut self.config
    }

    /// Forget both identities and all counters.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    fn handle_no_detection(&mut self) {
        self.stats.no_detection_frames += 1;
        let max = self.config.max_lost_frames;
        for slot in Slot::ALL {
            let identity = &mut self.identities[slot];
            identity.lost_frames = identity.lost_frames.saturating_add(1);
            if identity.is_lost(max) {
                if identity.is_initialized() {
                    tracing::debug!(%slot, lost_frames = identity.lost_frames, "clearing lost identity");
                }
                identity.clear();
            }
        }
    }

    fn initialize(&mut self, observations: Vec<PersonObservation>) {
        let mut iter = observations.into_iter();
        match (iter.next(), iter.next()) {
            (Some(first), Some(second)) => {
                self.seed(Slot::Left, first);
                self.seed(Slot::Right, second);
            }
            (Some(only), None) => {
                let slot = if only.center.x < 0.5 { Slot::Left } else { Slot::Right };
                self.seed(slot, only);
            }
            _ => {}
        }
    }

    fn match_single(&mut self, obs: PersonObservation) {
        let to_left = prior_distance(self.identities.left.position, &obs.center);
        let to_right = prior_distance(self.identities.right.position, &obs.center);
        let slot = if to_left < to_right { Slot::Left } else { Slot::Right };

        self.absorb(slot, obs);
        let other = &mut self.identities[slot.other()];
        other.lost_frames = other.lost_frames.saturating_add(1);
    }

    fn match_pair(&mut self, observations: Vec<PersonObservation>) {
        let priors = [self.identities.left.position, self.identities.right.position];
        let centers: Vec<Point2> = observations.iter().map(|obs| obs.center).collect();
        let costs = cost_matrix(&priors, &centers);

        let natural = [0, 1];
        let swapped = [1, 0];
        let swap = prefer_alternative(&costs, &natural, &swapped, self.config.swap_cost_ratio);

        let mut iter = observations.into_iter();
        let (Some(first), Some(second)) = (iter.next(), iter.next()) else {
            return;
        };

        if swap {
            self.stats.swaps += 1;
            tracing::debug!(
                keep = assignment_cost(&costs, &natural),
                swap = assignment_cost(&costs, &swapped),
                "swapping identities"
            );
            self.absorb(Slot::Left, second);
            self.absorb(Slot::Right, first);
        } else {
            self.absorb(Slot::Left, first);
            self.absorb(Slot::Right, second);
        }
    }

    fn seed(&mut self, slot: Slot, obs: PersonObservation) {
        self.note_recovery(slot);
        self.identities[slot].seed(obs);
    }

    fn absorb(&mut self, slot: Slot, obs: PersonObservation) {
        self.note_recovery(slot);

        let identity = &self.identities[slot];
        let jump = prior_distance(identity.position, &obs.center);
        if jump.is_finite() && jump > self.config.position_threshold {
            self.stats.large_moves += 1;
            tracing::debug!(%slot, jump, "large move");
        }

        self.identities[slot].absorb(obs, &self.config);
    }

    /// Count a slot coming back after being lost; never-tracked slots don't count.
    fn note_recovery(&mut self, slot: Slot) {
        let identity = &self.identities[slot];
        if identity.is_lost(self.config.max_lost_frames) && !identity.history.is_empty() {
            self.stats.recoveries += 1;
            tracing::debug!(%slot, lost_frames = identity.lost_frames, "identity recovered");
        }
    }
}

impl Default for IdentityTracker {
    fn default() -> Self {
        Self::with_defaults()
    }
}
