use crate::{AppResult, config::default_combinations};

use mic_led_core::{Chord, KeyToken};
use serde::Deserialize;

/// Alternative key combinations that toggle mute.
#[derive(Debug, Clone, Deserialize)]
pub struct HotkeyConfig {
    /// Each inner list is one chord, e.g. `["super", "z"]`.
    #[serde(default = "default_combinations")]
    pub combinations: Vec<Vec<String>>,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            combinations: default_combinations(),
        }
    }
}

impl HotkeyConfig {
    /// Parse the configured key names.
    #[track_caller]
    pub fn chords(&self) -> AppResult<Vec<Chord>> {
        let mut chords = Vec::with_capacity(self.combinations.len());
        for keys in &self.combinations {
            let mut chord = Chord::new();
            for key in keys {
                chord.insert(key.parse::<KeyToken>()?);
            }
            chords.push(chord);
        }
        Ok(chords)
    }

    /// Human-readable form for logging, e.g. `super+z | super+Z`.
    pub fn describe(&self) -> String {
        self.combinations
            .iter()
            .map(|keys| keys.join("+"))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
