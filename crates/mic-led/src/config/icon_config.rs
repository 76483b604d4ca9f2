use serde::Deserialize;
use std::path::PathBuf;

/// Optional PNG files replacing the built-in tray icons.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IconConfig {
    /// Icon shown while the microphone is muted.
    #[serde(default)]
    pub muted: Option<PathBuf>,
    /// Icon shown while the microphone is live.
    #[serde(default)]
    pub unmuted: Option<PathBuf>,
}
