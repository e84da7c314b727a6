//! Settings file (`pong.toml`)

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use game_core::Config;
use serde::Deserialize;
use tracing::{debug, info};

/// Settings file looked up in the working directory when `--config` is not given
pub const DEFAULT_SETTINGS_FILE: &str = "pong.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Pong".to_string(),
            width: game_core::Params::ARENA_WIDTH as u32,
            height: game_core::Params::ARENA_HEIGHT as u32,
            resizable: false,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontSettings {
    /// Font file to load; when unset `family` is looked up among system fonts
    pub path: Option<PathBuf>,
    pub family: String,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            path: None,
            family: "Arial".to_string(),
        }
    }
}

/// Everything configurable from the settings file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub window: WindowSettings,
    pub font: FontSettings,
    pub game: Config,
}

impl Settings {
    /// Load `path`, or `pong.toml` if it exists, or fall back to defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_SETTINGS_FILE);
                if !default.exists() {
                    debug!("no {} found, using defaults", DEFAULT_SETTINGS_FILE);
                    let settings = Self::default();
                    settings.validate()?;
                    return Ok(settings);
                }
                default
            }
        };

        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = Self::from_toml(&source)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml(source: &str) -> anyhow::Result<Self> {
        let settings: Settings = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size must be non-zero (got {}x{})",
            self.window.width,
            self.window.height
        );
        self.game.validate()?;
        Ok(())
    }
}
