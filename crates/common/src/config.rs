//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DuotrackError, DuotrackResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Identity tracker tunables.
    pub tracking: TrackingDefaults,

    /// High-knees detector tunables.
    pub high_knees: HighKneesDefaults,

    /// Side-slide detector tunables.
    pub side_slide: SideSlideDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default identity tracker parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingDefaults {
    /// Displacement (normalized) above which a match counts as a large move.
    pub position_threshold: f64,

    /// Frames an identity may go unmatched before it is reported lost.
    pub max_lost_frames: u32,

    /// EMA weight given to the incoming center.
    pub smooth_factor: f64,

    /// Keypoint confidence below which a detection is considered weak.
    pub min_confidence: f64,
}

/// Default high-knees parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighKneesDefaults {
    /// Nominal lift ratio a knee must exceed to count.
    pub up_ratio: f64,

    /// Lift ratio a raised knee must drop below to re-arm.
    pub down_ratio: f64,

    /// Per-leg debounce interval (ms).
    pub min_interval_ms: u64,

    /// Threshold reduction per second since the last count.
    pub speed_compensation: f64,
}

/// Default side-slide parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideSlideDefaults {
    pub left_threshold: f64,
    pub right_threshold: f64,
    pub center_min: f64,
    pub center_max: f64,

    /// Debounce interval between outward moves (ms).
    pub min_interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "duotrack=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for TrackingDefaults {
    fn default() -> Self {
        Self {
            position_threshold: 0.1,
            max_lost_frames: 10,
            smooth_factor: 0.3,
            min_confidence: 0.5,
        }
    }
}

impl Default for HighKneesDefaults {
    fn default() -> Self {
        Self {
            up_ratio: 0.15,
            down_ratio: 0.05,
            min_interval_ms: 150,
            speed_compensation: 0.1,
        }
    }
}

impl Default for SideSlideDefaults {
    fn default() -> Self {
        Self {
            left_threshold: 0.35,
            right_threshold: 0.65,
            center_min: 0.45,
            center_max: 0.55,
            min_interval_ms: 300,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> DuotrackResult<Self> {
        if !path.exists() {
            return Err(DuotrackError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> DuotrackResult<PathBuf> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> DuotrackResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject tunables that would break the tracker or detector invariants.
    pub fn validate(&self) -> DuotrackResult<()> {
        let t = &self.tracking;
        if !(t.smooth_factor > 0.0 && t.smooth_factor <= 1.0) {
            return Err(DuotrackError::config(format!(
                "tracking.smooth_factor must be in (0, 1], got {}",
                t.smooth_factor
            )));
        }
        if !(0.0..=1.0).contains(&t.min_confidence) {
            return Err(DuotrackError::config(format!(
                "tracking.min_confidence must be in [0, 1], got {}",
                t.min_confidence
            )));
        }
        if t.position_threshold < 0.0 {
            return Err(DuotrackError::config("tracking.position_threshold must be >= 0"));
        }

        let hk = &self.high_knees;
        if hk.down_ratio >= hk.up_ratio {
            return Err(DuotrackError::config(format!(
                "high_knees.down_ratio ({}) must be below up_ratio ({})",
                hk.down_ratio, hk.up_ratio
            )));
        }

        let ss = &self.side_slide;
        let ordered = ss.left_threshold < ss.center_min
            && ss.center_min < ss.center_max
            && ss.center_max < ss.right_threshold;
        if !ordered {
            return Err(DuotrackError::config(
                "side_slide thresholds must satisfy left < center_min < center_max < right",
            ));
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("duotrack").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"tracking":{"max_lost_frames":4}}"#).unwrap();
        assert_eq!(config.tracking.max_lost_frames, 4);
        assert_eq!(config.tracking.smooth_factor, 0.3);
        assert_eq!(config.side_slide.min_interval_ms, 300);
    }

    #[test]
    fn test_validate_rejects_inverted_knee_ratios() {
        let mut config = AppConfig::default();
        config.high_knees.down_ratio = 0.2;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, DuotrackError::Config { .. }));
    }

    #[test]
    fn test_validate_rejects_overlapping_slide_bands() {
        let mut config = AppConfig::default();
        config.side_slide.center_min = 0.3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_smoothing() {
        let mut config = AppConfig::default();
        config.tracking.smooth_factor = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = std::env::temp_dir().join(format!("duotrack-config-{}", std::process::id()));
        let path = dir.join("config.json");

        let mut config = AppConfig::default();
        config.tracking.max_lost_frames = 6;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_from_missing_path() {
        let err = AppConfig::load_from(Path::new("/nonexistent/duotrack.json")).unwrap_err();
        assert!(matches!(err, DuotrackError::FileNotFound { .. }));
    }
}
