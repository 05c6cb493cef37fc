//! Recorded pose frame streams.
//!
//! A frame stream is JSONL: one [`PoseFrame`] per line, in arrival order.
//! Blank lines and lines starting with `#` (header comments) are skipped.

use serde::{Deserialize, Serialize};

use crate::landmark::{PoseLandmarks, LANDMARK_COUNT};

/// Monotonic millisecond timestamp since stream start.
pub type FrameTimestampMs = u64;

/// Every subject the pose estimator reported for one frame.
///
/// `people` is unordered; the tracker decides which subject is which.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Milliseconds since stream start.
    #[serde(rename = "t")]
    pub timestamp_ms: FrameTimestampMs,

    /// Raw per-subject landmark sets.
    #[serde(default)]
    pub people: Vec<PoseLandmarks>,
}

impl PoseFrame {
    pub fn new(timestamp_ms: FrameTimestampMs, people: Vec<PoseLandmarks>) -> Self {
        Self {
            timestamp_ms,
            people,
        }
    }

    /// A frame in which nobody was detected.
    pub fn empty(timestamp_ms: FrameTimestampMs) -> Self {
        Self::new(timestamp_ms, Vec::new())
    }
}

/// A frame stream record that failed to parse.
#[derive(Debug, thiserror::Error)]
#[error("Invalid frame at line {line}: {source}")]
pub struct FrameParseError {
    /// 1-based line number in the stream, comments included.
    pub line: usize,
    pub source: serde_json::Error,
}

/// Parse frames from JSONL content (one JSON object per line).
pub fn parse_frames(jsonl: &str) -> Result<Vec<PoseFrame>, FrameParseError> {
    jsonl
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, record)| {
            serde_json::from_str(record).map_err(|source| FrameParseError { line, source })
        })
        .collect()
}

/// Serialize frames to JSONL format.
pub fn serialize_frames(frames: &[PoseFrame]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}

/// Check a parsed stream for problems the tracker would silently absorb.
///
/// Returns human-readable issues; an empty list means the stream is clean.
pub fn validate_frames(frames: &[PoseFrame]) -> Vec<String> {
    let mut issues = Vec::new();
    let mut prev_ts: Option<FrameTimestampMs> = None;

    for (index, frame) in frames.iter().enumerate() {
        if let Some(prev) = prev_ts {
            if frame.timestamp_ms < prev {
                issues.push(format!(
                    "frame {index}: timestamp {} precedes previous {prev}",
                    frame.timestamp_ms
                ));
            }
        }
        prev_ts = Some(frame.timestamp_ms);

        if frame.people.len() > 2 {
            issues.push(format!(
                "frame {index}: {} people detected, only the first two are tracked",
                frame.people.len()
            ));
        }

        for (person, pose) in frame.people.iter().enumerate() {
            if pose.len() < LANDMARK_COUNT {
                issues.push(format!(
                    "frame {index} person {person}: {} landmarks, expected {LANDMARK_COUNT}",
                    pose.len()
                ));
            }
            let out_of_range = pose
                .iter()
                .filter(|lm| !(0.0..=1.0).contains(&lm.x) || !(0.0..=1.0).contains(&lm.y))
                .count();
            if out_of_range > 0 {
                issues.push(format!(
                    "frame {index} person {person}: {out_of_range} landmarks outside [0, 1]"
                ));
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::Landmark;

    fn full_pose(x: f64) -> PoseLandmarks {
        PoseLandmarks::new(vec![Landmark::new(x, 0.5); LANDMARK_COUNT])
    }

    #[test]
    fn test_frame_json_format() {
        let frame = PoseFrame::new(40, vec![PoseLandmarks::new(vec![Landmark::new(0.5, 0.3)])]);
        let json = serde_json::to_string(&frame).unwrap();
        assert_eq!(json, r#"{"t":40,"people":[[{"x":0.5,"y":0.3}]]}"#);
    }

    #[test]
    fn test_missing_people_parses_as_empty_frame() {
        let frame: PoseFrame = serde_json::from_str(r#"{"t":7}"#).unwrap();
        assert_eq!(frame, PoseFrame::empty(7));
    }

    #[test]
    fn test_parse_frames_skips_header_comment() {
        let jsonl = "# duotrack frames v1\n\n{\"t\":0,\"people\":[]}\n{\"t\":33,\"people\":[]}\n";
        let frames = parse_frames(jsonl).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].timestamp_ms, 33);
    }

    #[test]
    fn test_jsonl_roundtrip() {
        let frames = vec![
            PoseFrame::new(0, vec![full_pose(0.3), full_pose(0.7)]),
            PoseFrame::empty(33),
        ];
        let jsonl = serialize_frames(&frames).unwrap();
        assert_eq!(parse_frames(&jsonl).unwrap(), frames);
    }

    #[test]
    fn test_parse_frames_reports_bad_line() {
        let err = parse_frames("# header\n{\"t\":0}\n\nnot json\n").unwrap_err();
        assert_eq!(err.line, 4);
        assert!(err.to_string().starts_with("Invalid frame at line 4"));
    }

    #[test]
    fn test_validate_clean_stream() {
        let frames = vec![
            PoseFrame::new(0, vec![full_pose(0.3)]),
            PoseFrame::new(33, vec![full_pose(0.3), full_pose(0.7)]),
        ];
        assert!(validate_frames(&frames).is_empty());
    }

    #[test]
    fn test_validate_flags_problems() {
        let short = PoseLandmarks::new(vec![Landmark::new(1.2, 0.5); 10]);
        let frames = vec![
            PoseFrame::new(50, vec![full_pose(0.1), full_pose(0.5), full_pose(0.9)]),
            PoseFrame::new(20, vec![short]),
        ];
        let issues = validate_frames(&frames);
        assert_eq!(issues.len(), 4);
        assert!(issues[0].contains("3 people"));
        assert!(issues[1].contains("precedes"));
        assert!(issues[2].contains("10 landmarks"));
        assert!(issues[3].contains("outside"));
    }
}
