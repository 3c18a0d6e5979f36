//! Game settings
//!
//! Loaded from a JSON file next to where the game is launched. Missing or
//! malformed files fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SCROLL_SPEED, MAX_SCROLL_SPEED};
use crate::sim::words::DEFAULT_DIFFICULTY;

/// Environment variable naming the settings file
pub const CONFIG_ENV: &str = "TYPE_CLIMBER_CONFIG";
/// Settings file used when the environment variable is unset
pub const DEFAULT_CONFIG_FILE: &str = "type_climber.json";
/// Debug log written when no `log_file` is configured
pub const DEFAULT_LOG_FILE: &str = "type_climber.log";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scroll speed in rows per second
    pub scroll_speed: f64,
    /// Initial word difficulty (1-3)
    pub difficulty: u8,
    /// Word RNG seed (random when unset)
    pub seed: Option<u64>,
    /// Debug log destination
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scroll_speed: DEFAULT_SCROLL_SPEED,
            difficulty: DEFAULT_DIFFICULTY,
            seed: None,
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

impl Settings {
    /// Settings file path: `$TYPE_CLIMBER_CONFIG`, else `type_climber.json`
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load from the default location
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    /// Replace out-of-range values with defaults
    pub fn validated(mut self) -> Self {
        if !self.scroll_speed.is_finite() || self.scroll_speed <= 0.0 {
            log::warn!(
                "Ignoring scroll_speed {}, using {}",
                self.scroll_speed,
                DEFAULT_SCROLL_SPEED
            );
            self.scroll_speed = DEFAULT_SCROLL_SPEED;
        } else if self.scroll_speed > MAX_SCROLL_SPEED {
            log::warn!(
                "Capping scroll_speed {} at {}",
                self.scroll_speed,
                MAX_SCROLL_SPEED
            );
            self.scroll_speed = MAX_SCROLL_SPEED;
        }
        if !(1..=3).contains(&self.difficulty) {
            log::warn!(
                "Ignoring difficulty {}, using {}",
                self.difficulty,
                DEFAULT_DIFFICULTY
            );
            self.difficulty = DEFAULT_DIFFICULTY;
        }
        self
    }
}
