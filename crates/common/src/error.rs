//! Error types shared across Duotrack crates.
//!
//! The tracking and detection core never fails; these errors only surface
//! at the fallible edges (configuration, frame streams, CLI input).

use std::path::PathBuf;

/// Top-level error type for Duotrack operations.
#[derive(Debug, thiserror::Error)]
pub enum DuotrackError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Frame stream error at line {line}: {message}")]
    FrameStream { line: usize, message: String },

    #[error("Unknown exercise: {name}")]
    UnknownExercise { name: String },

    #[error("Unknown pose state: {token}")]
    UnknownPoseState { token: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using DuotrackError.
pub type DuotrackResult<T> = Result<T, DuotrackError>;

impl DuotrackError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn frame_stream(line: usize, msg: impl Into<String>) -> Self {
        Self::FrameStream {
            line,
            message: msg.into(),
        }
    }

    pub fn unknown_exercise(name: impl Into<String>) -> Self {
        Self::UnknownExercise { name: name.into() }
    }

    pub fn unknown_pose_state(token: impl Into<String>) -> Self {
        Self::UnknownPoseState {
            token: token.into(),
        }
    }
}
