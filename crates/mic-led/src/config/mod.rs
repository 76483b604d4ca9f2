mod config;
mod hotkey_config;
mod icon_config;
mod menu_config;
mod mute_config;
mod tray_config;

pub(crate) use {
    config::Config,
    hotkey_config::HotkeyConfig,
    icon_config::IconConfig,
    menu_config::{MenuEntryConfig, build_menu_entries},
    mute_config::MuteConfig,
    tray_config::TrayConfig,
};

use crate::{AppError, AppResult, MenuAction};

use std::panic::Location;

use directories::ProjectDirs;
use error_location::ErrorLocation;

pub(crate) const DEFAULT_TOOLTIP: &str = "micLED";
pub(crate) const DEFAULT_MUTE_PROGRAM: &str = "nircmd.exe";
pub(crate) const DEFAULT_START_MUTED: bool = true;
pub(crate) const CONFIG_ENV_VAR: &str = "MIC_LED_CONFIG";

pub(crate) fn default_tooltip() -> String {
    DEFAULT_TOOLTIP.to_string()
}

pub(crate) fn default_mute_program() -> String {
    DEFAULT_MUTE_PROGRAM.to_string()
}

pub(crate) fn default_mute_args() -> Vec<String> {
    ["mutesysvolume", "1", "default_record"].map(String::from).to_vec()
}

pub(crate) fn default_unmute_args() -> Vec<String> {
    ["mutesysvolume", "0", "default_record"].map(String::from).to_vec()
}

pub(crate) fn default_start_muted() -> bool {
    DEFAULT_START_MUTED
}

/// WIN+Z in either letter case.
pub(crate) fn default_combinations() -> Vec<Vec<String>> {
    vec![
        vec!["super".to_string(), "z".to_string()],
        vec!["super".to_string(), "Z".to_string()],
    ]
}

pub(crate) fn default_menu() -> Vec<MenuEntryConfig> {
    vec![
        MenuEntryConfig::action("Toggle mute", MenuAction::ToggleMute),
        MenuEntryConfig::submenu(
            "Open",
            vec![
                MenuEntryConfig::action("Log folder", MenuAction::OpenLogFolder),
                MenuEntryConfig::action("Config folder", MenuAction::OpenConfigFolder),
            ],
        ),
    ]
}

#[track_caller]
pub(crate) fn project_dirs() -> AppResult<ProjectDirs> {
    ProjectDirs::from("com", "mic-led", "micLED").ok_or_else(|| AppError::ConfigError {
        reason: "Failed to get project directories".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
