//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the persisted
//! keyboard settings in TOML format with platform-specific directory
//! resolution. The engine itself never touches the filesystem; config
//! I/O happens only at session boundaries in the CLI/TUI collaborators.

use crate::constants::{
    DEFAULT_LAYER, DEFAULT_WIDTH_PERCENT, MAX_WIDTH_PERCENT, MIN_WIDTH_PERCENT,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persisted keyboard settings.
///
/// Loaded at session start and saved at session end. The engine treats
/// both fields as opaque inputs: an unknown layer name simply falls back
/// to "default" when the session controller is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// Width of each keyboard panel as a percentage of the screen width
    #[serde(default = "default_width_percent")]
    pub width_percent: f32,
    /// Layer to restore on the next launch
    #[serde(default = "default_layer_name")]
    pub current_layer: String,
}

fn default_width_percent() -> f32 {
    DEFAULT_WIDTH_PERCENT
}

fn default_layer_name() -> String {
    DEFAULT_LAYER.to_string()
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            width_percent: DEFAULT_WIDTH_PERCENT,
            current_layer: DEFAULT_LAYER.to_string(),
        }
    }
}

impl KeyboardConfig {
    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/Splitboard/`
    /// - macOS: `~/Library/Application Support/Splitboard/`
    /// - Windows: `%APPDATA%\Splitboard\`
    ///
    /// The `SPLITBOARD_CONFIG_DIR` environment variable overrides the
    /// platform directory (used by the end-to-end tests).
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("SPLITBOARD_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Splitboard");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `width_percent` is within the allowed 10–30 range
    /// - `current_layer` is non-empty
    pub fn validate(&self) -> Result<()> {
        if !(MIN_WIDTH_PERCENT..=MAX_WIDTH_PERCENT).contains(&self.width_percent) {
            anyhow::bail!(
                "width_percent {} is outside the allowed range {}-{}",
                self.width_percent,
                MIN_WIDTH_PERCENT,
                MAX_WIDTH_PERCENT
            );
        }

        if self.current_layer.is_empty() {
            anyhow::bail!("current_layer cannot be empty");
        }

        Ok(())
    }

    /// The panel width percentage clamped into the allowed range.
    ///
    /// Hand-edited config files may carry out-of-range values; collaborators
    /// that only need a usable width clamp instead of failing.
    #[must_use]
    pub fn clamped_width_percent(&self) -> f32 {
        self.width_percent.clamp(MIN_WIDTH_PERCENT, MAX_WIDTH_PERCENT)
    }

    /// Computes the panel pixel width for a given screen width.
    #[must_use]
    pub fn panel_width(&self, screen_width: f32) -> f32 {
        screen_width * (self.clamped_width_percent() / 100.0)
    }
}
