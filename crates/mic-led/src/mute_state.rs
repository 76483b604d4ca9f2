use std::fmt;

/// Microphone state shown by the tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuteState {
    /// Default recording device is muted.
    Muted,
    /// Default recording device is live.
    Unmuted,
}

impl MuteState {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            MuteState::Muted => MuteState::Unmuted,
            MuteState::Unmuted => MuteState::Muted,
        }
    }

    /// Lowercase name used in logs and notification URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            MuteState::Muted => "muted",
            MuteState::Unmuted => "unmuted",
        }
    }
}

impl fmt::Display for MuteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
