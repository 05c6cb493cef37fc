//! Validate a recorded frame stream.

use std::path::PathBuf;

use duotrack_pose_model::frame::validate_frames;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating frame stream at: {}", path.display());

    let frames = super::load_frames(&path)?;
    let people: usize = frames.iter().map(|f| f.people.len()).sum();
    let empty = frames.iter().filter(|f| f.people.is_empty()).count();

    println!("  Frames: {}", frames.len());
    if let (Some(first), Some(last)) = (frames.first(), frames.last()) {
        println!("  Span: {} ms .. {} ms", first.timestamp_ms, last.timestamp_ms);
    }
    println!("  Detections: {people}");
    println!("  Empty frames: {empty}");

    let issues = validate_frames(&frames);
    if issues.is_empty() {
        println!("\nFrame stream is valid.");
    } else {
        println!("\nValidation issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
        println!(
            "\n{} issue(s) found. Replay may be unreliable.",
            issues.len()
        );
    }

    Ok(())
}
