//! Game settings
//!
//! Loaded from an optional JSON file; every field has a default so partial
//! files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{COUNTDOWN_INTERVAL_MS, MOTION_INTERVAL_MS, SESSION_SECONDS};
use crate::renderer::FrameFormat;

/// Settings load/validation errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Runner and timer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timers ===
    /// Motion tick period in ms
    pub motion_interval_ms: u32,
    /// Countdown tick period in ms
    pub countdown_interval_ms: u32,
    /// Session length in countdown ticks
    pub session_seconds: u32,

    // === Session ===
    /// Item RNG seed (random per run if absent)
    pub seed: Option<u64>,
    /// Let the autopilot drive the wolf
    pub autopilot: bool,

    // === Runner ===
    /// Sleep between ticks instead of simulating as fast as possible
    pub realtime: bool,
    /// Frame output format
    pub frame_output: FrameFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            motion_interval_ms: MOTION_INTERVAL_MS,
            countdown_interval_ms: COUNTDOWN_INTERVAL_MS,
            session_seconds: SESSION_SECONDS,

            seed: None,
            autopilot: true,

            realtime: false,
            frame_output: FrameFormat::Text,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{} ({}), using default settings", e, path.as_ref().display());
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.motion_interval_ms == 0 {
            return Err(SettingsError::Invalid(
                "motion_interval_ms must be non-zero".to_string(),
            ));
        }
        if self.countdown_interval_ms == 0 {
            return Err(SettingsError::Invalid(
                "countdown_interval_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
