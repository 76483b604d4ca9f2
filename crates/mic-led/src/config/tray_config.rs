use crate::config::default_tooltip;

use serde::Deserialize;

/// Tray icon presentation.
#[derive(Debug, Clone, Deserialize)]
pub struct TrayConfig {
    /// Hover text of the tray icon.
    #[serde(default = "default_tooltip")]
    pub tooltip: String,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            tooltip: default_tooltip(),
        }
    }
}
