pub mod config;
pub mod replay;
pub mod validate;

use std::path::Path;

use anyhow::Context;
use duotrack_common::error::DuotrackError;
use duotrack_pose_model::frame::{parse_frames, PoseFrame};

/// Read a JSONL frame stream, reporting parse failures by 1-based line.
pub fn load_frames(path: &Path) -> anyhow::Result<Vec<PoseFrame>> {
    if !path.exists() {
        return Err(DuotrackError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read frame stream {}", path.display()))?;
    let frames = parse_frames(&content)
        .map_err(|e| DuotrackError::frame_stream(e.line, e.source.to_string()))?;
    Ok(frames)
}
