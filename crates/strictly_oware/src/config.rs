//! Engine configuration.

use crate::sequencer::DEFAULT_STEP_INTERVAL;
use crate::types::RuleVariant;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a game, loadable from TOML.
///
/// ```toml
/// variant = "abapa"
///
/// [playback]
/// step_millis = 120
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct OwareConfig {
    /// Rule variant for new games.
    variant: RuleVariant,

    /// Animation pacing.
    playback: PlaybackSettings,
}

/// Animation pacing for [`crate::MoveSequencer`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Milliseconds between two animated events.
    step_millis: u64,
}

impl PlaybackSettings {
    /// Pause between two animated events.
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_millis)
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        let millis = DEFAULT_STEP_INTERVAL.as_millis();
        Self {
            step_millis: u64::try_from(millis).unwrap_or(250),
        }
    }
}

impl OwareConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(variant = %config.variant, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })
    }

    /// Replaces the rule variant.
    pub fn with_variant(mut self, variant: RuleVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Replaces the animation pause.
    pub fn with_step_millis(mut self, step_millis: u64) -> Self {
        self.playback.step_millis = step_millis;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
