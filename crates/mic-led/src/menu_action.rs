use serde::Deserialize;

/// Built-in actions a configured menu entry can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    /// Flip the microphone state.
    ToggleMute,
    /// Mute the microphone.
    Mute,
    /// Unmute the microphone.
    Unmute,
    /// Open the log directory in the file manager.
    OpenLogFolder,
    /// Open the config directory in the file manager.
    OpenConfigFolder,
}
