//! Native driver settings
//!
//! Read from a JSON file next to the binary. Gameplay tuning stays in `consts`;
//! these only control how the driver runs a session.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::sim::Difficulty;

/// Default settings file name
pub const SETTINGS_FILE: &str = "breakout.json";

/// Driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed. Derived from the clock at startup when absent.
    pub seed: Option<u64>,
    /// Let the autopilot play
    pub autoplay: bool,
    /// Play screen the driver selects
    pub difficulty: Difficulty,
    /// Frames to run before exiting
    pub max_frames: u32,
    /// Simulated seconds per frame
    pub frame_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            autoplay: true,
            difficulty: Difficulty::Easy,
            max_frames: 60 * 120,
            frame_dt: 1.0 / 60.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => Some(settings.sanitized()),
            Err(e) => {
                log::warn!("Invalid settings: {}", e);
                None
            }
        }
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
            }
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Settings as pretty JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// The configured seed, or one taken from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Replace out-of-range values with defaults
    fn sanitized(mut self) -> Self {
        if !(self.frame_dt.is_finite() && self.frame_dt > 0.0) {
            log::warn!("Ignoring frame_dt {}", self.frame_dt);
            self.frame_dt = Self::default().frame_dt;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "difficulty": "random" }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.difficulty, Difficulty::Random);
        assert_eq!(settings.max_frames, Settings::default().max_frames);
        assert_eq!(settings.resolve_seed(), 42);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(Settings::from_json("{ seed: ").is_none());
        assert!(Settings::from_json(r#"{ "difficulty": "impossible" }"#).is_none());
    }

    #[test]
    fn test_bad_frame_dt_is_replaced() {
        let settings = Settings::from_json(r#"{ "frame_dt": -1.0 }"#).unwrap();
        assert_eq!(settings.frame_dt, Settings::default().frame_dt);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load("/nonexistent/breakout.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            ..Default::default()
        };
        assert_eq!(Settings::from_json(&settings.to_json()), Some(settings));
    }
}
