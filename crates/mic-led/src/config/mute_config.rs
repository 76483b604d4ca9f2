use crate::config::{
    default_mute_args, default_mute_program, default_start_muted, default_unmute_args,
};

use serde::Deserialize;

/// External command and notification used to flip the microphone.
#[derive(Debug, Clone, Deserialize)]
pub struct MuteConfig {
    /// Program run for both directions. Empty disables the command.
    #[serde(default = "default_mute_program")]
    pub program: String,

    /// Arguments that mute the default recording device.
    #[serde(default = "default_mute_args")]
    pub mute_args: Vec<String>,

    /// Arguments that unmute the default recording device.
    #[serde(default = "default_unmute_args")]
    pub unmute_args: Vec<String>,

    /// URL requested after every change. `{state}` is replaced with
    /// `muted` or `unmuted`.
    #[serde(default)]
    pub notify_url: Option<String>,

    /// Mute the microphone when the tray starts.
    #[serde(default = "default_start_muted")]
    pub start_muted: bool,
}

impl Default for MuteConfig {
    fn default() -> Self {
        Self {
            program: default_mute_program(),
            mute_args: default_mute_args(),
            unmute_args: default_unmute_args(),
            notify_url: None,
            start_muted: default_start_muted(),
        }
    }
}
