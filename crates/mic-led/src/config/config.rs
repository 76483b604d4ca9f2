//! Configuration management for mic-led.
//!
//! Loads a TOML file from the platform config directory, or from the path
//! in `MIC_LED_CONFIG`. The file is never written; a missing file means
//! defaults.

use crate::{
    AppError, AppResult,
    config::{
        CONFIG_ENV_VAR, HotkeyConfig, IconConfig, MenuEntryConfig, MuteConfig, TrayConfig,
        default_menu, project_dirs,
    },
};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use serde::Deserialize;
use tracing::{info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Tray icon presentation.
    #[serde(default)]
    pub tray: TrayConfig,
    /// Mute toggle key combinations.
    #[serde(default)]
    pub hotkey: HotkeyConfig,
    /// Mute command and notification.
    #[serde(default)]
    pub mute: MuteConfig,
    /// Icon image overrides.
    #[serde(default)]
    pub icons: IconConfig,
    /// Popup menu entries, in display order. Quit is always appended.
    #[serde(default = "default_menu")]
    pub menu: Vec<MenuEntryConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tray: TrayConfig::default(),
            hotkey: HotkeyConfig::default(),
            mute: MuteConfig::default(),
            icons: IconConfig::default(),
            menu: default_menu(),
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let config = Self::from_file(&config_path)?;
            info!(config_path = ?config_path, "Configuration loaded");
            Ok(config)
        } else {
            info!(config_path = ?config_path, "No config found, using defaults");
            Ok(Self::default())
        }
    }

    /// Read and parse one config file.
    #[track_caller]
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config {}: {}", path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration text. Missing sections take their defaults.
    #[track_caller]
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Directory holding the config file, for the "open config folder" action.
    #[track_caller]
    pub fn config_dir() -> AppResult<PathBuf> {
        let path = Self::config_path()?;
        Ok(path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")))
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }
}
