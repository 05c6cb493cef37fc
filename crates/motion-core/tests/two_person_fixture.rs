use std::path::PathBuf;

use duotrack_motion_core::feedback;
use duotrack_motion_core::session::{DualSession, RepEvent};
use duotrack_motion_core::{ExerciseKind, Slot};
use duotrack_pose_model::frame::{parse_frames, validate_frames, PoseFrame};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn load_fixture_frames() -> Vec<PoseFrame> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("two-person-high-knees")
        .join("frames.jsonl");

    let content = std::fs::read_to_string(path).expect("fixture frames should be readable");
    parse_frames(&content).expect("fixture frames should parse")
}

fn replay(frames: &[PoseFrame], seed: u64) -> (DualSession, Vec<RepEvent>) {
    let mut session = DualSession::with_defaults(ExerciseKind::HighKnees);
    let mut rng = StdRng::seed_from_u64(seed);
    let events = frames
        .iter()
        .flat_map(|frame| session.process_frame(frame, &mut rng).events)
        .collect();
    (session, events)
}

#[test]
fn fixture_is_clean() {
    let frames = load_fixture_frames();
    assert_eq!(frames.len(), 60);
    assert!(validate_frames(&frames).is_empty());
}

#[test]
fn fixture_counts_ten_reps_per_subject() {
    let frames = load_fixture_frames();
    let (session, events) = replay(&frames, 11);

    let counts = session.counts();
    assert_eq!(counts.left, 10);
    assert_eq!(counts.right, 10);
    assert_eq!(events.len(), 20);

    let stats = session.tracker_stats();
    assert_eq!(stats.swaps, 0);
    assert_eq!(stats.no_detection_frames, 1);
    assert_eq!(stats.recoveries, 0);

    for event in &events {
        assert_eq!(event.exercise, ExerciseKind::HighKnees);
        assert!(feedback::phrases(ExerciseKind::HighKnees).contains(&event.feedback));
    }
}

#[test]
fn fixture_slots_stay_on_their_side() {
    let frames = load_fixture_frames();
    let mut session = DualSession::with_defaults(ExerciseKind::HighKnees);
    let mut rng = StdRng::seed_from_u64(3);

    for frame in &frames {
        let outcome = session.process_frame(frame, &mut rng);
        let left = outcome.tracked.left.position.expect("left tracked");
        let right = outcome.tracked.right.position.expect("right tracked");
        assert!(left.x < 0.35, "left drifted to {} at t={}", left.x, frame.timestamp_ms);
        assert!(right.x > 0.65, "right drifted to {} at t={}", right.x, frame.timestamp_ms);
    }
}

#[test]
fn fixture_events_alternate_legs_per_subject() {
    let frames = load_fixture_frames();
    let (_, events) = replay(&frames, 5);

    for slot in Slot::ALL {
        let states: Vec<String> = events
            .iter()
            .filter(|e| e.slot == slot)
            .map(|e| e.state.to_string())
            .collect();
        let expected: Vec<String> = (0..10)
            .map(|i| if i % 2 == 0 { "up_left" } else { "up_right" }.to_string())
            .collect();
        assert_eq!(states, expected, "{slot}");

        let running: Vec<u32> = events.iter().filter(|e| e.slot == slot).map(|e| e.count).collect();
        assert_eq!(running, (1..=10).collect::<Vec<u32>>());
    }
}

#[test]
fn fixture_replay_is_deterministic_for_a_seed() {
    let frames = load_fixture_frames();
    let (_, first) = replay(&frames, 99);
    let (_, second) = replay(&frames, 99);
    assert_eq!(first, second);
}
