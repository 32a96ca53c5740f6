//! Host settings with persistence
//!
//! Settings are saved to `~/.config/vigil/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use vigil_core::{ConfigError, TimeConfig};
use vigil_game::CameraConfig;

/// All host settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub camera: CameraConfig,
    pub time: TimeConfig,
    pub session: SessionSettings,
}

impl GameSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vigil"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the config directory, or return defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load and validate settings from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;
        settings.validate().context("Invalid settings")?;
        Ok(settings)
    }

    /// Save settings to the config directory
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };
        self.save_to(&dir.join("settings.toml"))
    }

    /// Save settings to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create config directory {:?}", dir))?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.camera.validate()?;
        self.time.validate()
    }
}

/// Headless session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Number of frames to simulate
    pub frames: u32,
    /// Interval between simulated scroll notches, in frames (0 = never)
    pub scroll_every: u32,
    /// Frame at which the inventory overlay opens (0 = never)
    pub inventory_open_at: u32,
    /// Frames the inventory stays open
    pub inventory_open_for: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            frames: 600,
            scroll_every: 90,
            inventory_open_at: 240,
            inventory_open_for: 120,
        }
    }
}

impl SessionSettings {
    /// Whether the inventory overlay is open on `frame`
    pub fn inventory_open(&self, frame: u32) -> bool {
        self.inventory_open_at != 0
            && frame >= self.inventory_open_at
            && frame < self.inventory_open_at.saturating_add(self.inventory_open_for)
    }

    /// Whether a scroll notch is sent on `frame`
    pub fn scrolls_on(&self, frame: u32) -> bool {
        self.scroll_every != 0 && frame != 0 && frame % self.scroll_every == 0
    }
}
