use crate::CoreError;

use std::{fmt, panic::Location, str::FromStr};

use error_location::ErrorLocation;

/// A key as far as chord matching is concerned.
///
/// Characters keep their case, so `Char('z')` and `Char('Z')` are
/// different tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyToken {
    /// Windows / Command / Meta.
    Super,
    /// Either Control key.
    Control,
    /// Either Shift key.
    Shift,
    /// Alt / Option, AltGr included.
    Alt,
    /// Space bar.
    Space,
    /// F1 through F24.
    Function(u8),
    /// A printable character.
    Char(char),
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyToken::Super => f.write_str("super"),
            KeyToken::Control => f.write_str("ctrl"),
            KeyToken::Shift => f.write_str("shift"),
            KeyToken::Alt => f.write_str("alt"),
            KeyToken::Space => f.write_str("space"),
            KeyToken::Function(n) => write!(f, "f{n}"),
            KeyToken::Char(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for KeyToken {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if !c.is_control() && !c.is_whitespace() {
                return Ok(KeyToken::Char(c));
            }
        }

        let lower = trimmed.to_ascii_lowercase();
        let token = match lower.as_str() {
            "super" | "cmd" | "command" | "win" | "meta" => Some(KeyToken::Super),
            "ctrl" | "control" => Some(KeyToken::Control),
            "shift" => Some(KeyToken::Shift),
            "alt" | "option" => Some(KeyToken::Alt),
            "space" => Some(KeyToken::Space),
            _ => lower
                .strip_prefix('f')
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| (1..=24).contains(n))
                .map(KeyToken::Function),
        };

        token.ok_or_else(|| CoreError::InvalidKeyToken {
            token: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
