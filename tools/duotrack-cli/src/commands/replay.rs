//! Replay a recorded frame stream through a two-person session.

use std::path::PathBuf;

use duotrack_common::config::AppConfig;
use duotrack_motion_core::tracker::TrackerStats;
use duotrack_motion_core::{DualSession, ExerciseKind, SlotPair};
use duotrack_pose_model::frame::validate_frames;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Serialize)]
struct ReplaySummary {
    exercise: ExerciseKind,
    frames: usize,
    duration_ms: u64,
    counts: SlotPair<u32>,
    tracker: TrackerStats,
}

pub fn run(
    config: &AppConfig,
    path: PathBuf,
    exercise: ExerciseKind,
    seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    let frames = super::load_frames(&path)?;
    for issue in validate_frames(&frames) {
        tracing::warn!(%issue, "frame stream issue");
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = DualSession::from_app_config(config, exercise);

    if !json {
        println!("Replaying {} ({} frames, {exercise})", path.display(), frames.len());
    }

    for frame in &frames {
        let outcome = session.process_frame(frame, &mut rng);
        for event in &outcome.events {
            if json {
                println!("{}", serde_json::to_string(event)?);
            } else {
                println!(
                    "  [{:>7} ms] {:<5} #{:<3} {:<8} {}",
                    event.timestamp_ms, event.slot, event.count, event.state, event.feedback
                );
            }
        }
    }

    let duration_ms = match (frames.first(), frames.last()) {
        (Some(first), Some(last)) => last.timestamp_ms.saturating_sub(first.timestamp_ms),
        _ => 0,
    };
    let summary = ReplaySummary {
        exercise,
        frames: frames.len(),
        duration_ms,
        counts: session.counts(),
        tracker: session.tracker_stats(),
    };

    if json {
        println!("{}", serde_json::to_string(&summary)?);
        return Ok(());
    }

    println!();
    println!("Repetitions:");
    println!("  Left:  {}", summary.counts.left);
    println!("  Right: {}", summary.counts.right);
    println!();
    println!("Tracking ({:.1}s):", summary.duration_ms as f64 / 1000.0);
    println!("  Identity swaps: {}", summary.tracker.swaps);
    println!("  Empty frames: {}", summary.tracker.no_detection_frames);
    println!("  Recoveries: {}", summary.tracker.recoveries);
    println!("  Large moves: {}", summary.tracker.large_moves);

    Ok(())
}
