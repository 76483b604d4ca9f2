//! Raw keyboard events to chord tokens.
//!
//! Letter case follows the shift state at press time, so `super+Z` and
//! `super+z` are distinct tokens. The token produced by a press is
//! remembered and returned for the matching release, even if shift was
//! let go in between.

use mic_led_core::KeyToken;

use rdev::Key;

/// Stateful translator from `rdev` keys to [`KeyToken`]s.
#[derive(Debug, Default)]
pub struct KeyTranslator {
    shift: bool,
    pressed: Vec<(Key, KeyToken)>,
}

impl KeyTranslator {
    /// Create a translator with no keys held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a key press. `name` is the text the OS produced for it, if
    /// any. Auto-repeat presses return the token of the original press.
    pub fn press(&mut self, key: Key, name: Option<&str>) -> Option<KeyToken> {
        if let Some((_, token)) = self.pressed.iter().find(|(held, _)| *held == key) {
            return Some(*token);
        }

        if matches!(key, Key::ShiftLeft | Key::ShiftRight) {
            self.shift = true;
        }

        let token = modifier(key)
            .or_else(|| named(name))
            .or_else(|| physical(key, self.shift))?;
        self.pressed.push((key, token));
        Some(token)
    }

    /// Translate a key release into the token its press produced.
    pub fn release(&mut self, key: Key) -> Option<KeyToken> {
        if matches!(key, Key::ShiftLeft | Key::ShiftRight) {
            self.shift = self
                .pressed
                .iter()
                .any(|(held, _)| *held != key && matches!(held, Key::ShiftLeft | Key::ShiftRight));
        }

        let index = self.pressed.iter().position(|(held, _)| *held == key)?;
        Some(self.pressed.swap_remove(index).1)
    }
}

fn modifier(key: Key) -> Option<KeyToken> {
    let token = match key {
        Key::MetaLeft | Key::MetaRight => KeyToken::Super,
        Key::ControlLeft | Key::ControlRight => KeyToken::Control,
        Key::ShiftLeft | Key::ShiftRight => KeyToken::Shift,
        Key::Alt | Key::AltGr => KeyToken::Alt,
        Key::Space => KeyToken::Space,
        Key::F1 => KeyToken::Function(1),
        Key::F2 => KeyToken::Function(2),
        Key::F3 => KeyToken::Function(3),
        Key::F4 => KeyToken::Function(4),
        Key::F5 => KeyToken::Function(5),
        Key::F6 => KeyToken::Function(6),
        Key::F7 => KeyToken::Function(7),
        Key::F8 => KeyToken::Function(8),
        Key::F9 => KeyToken::Function(9),
        Key::F10 => KeyToken::Function(10),
        Key::F11 => KeyToken::Function(11),
        Key::F12 => KeyToken::Function(12),
        _ => return None,
    };
    Some(token)
}

// Only a single printable character is trusted. Some platforms report
// control characters while a modifier is held.
fn named(name: Option<&str>) -> Option<KeyToken> {
    let mut chars = name?.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() && !c.is_whitespace() => Some(KeyToken::Char(c)),
        _ => None,
    }
}

fn physical(key: Key, shift: bool) -> Option<KeyToken> {
    let c = match key {
        Key::KeyA => 'a',
        Key::KeyB => 'b',
        Key::KeyC => 'c',
        Key::KeyD => 'd',
        Key::KeyE => 'e',
        Key::KeyF => 'f',
        Key::KeyG => 'g',
        Key::KeyH => 'h',
        Key::KeyI => 'i',
        Key::KeyJ => 'j',
        Key::KeyK => 'k',
        Key::KeyL => 'l',
        Key::KeyM => 'm',
        Key::KeyN => 'n',
        Key::KeyO => 'o',
        Key::KeyP => 'p',
        Key::KeyQ => 'q',
        Key::KeyR => 'r',
        Key::KeyS => 's',
        Key::KeyT => 't',
        Key::KeyU => 'u',
        Key::KeyV => 'v',
        Key::KeyW => 'w',
        Key::KeyX => 'x',
        Key::KeyY => 'y',
        Key::KeyZ => 'z',
        Key::Num0 => '0',
        Key::Num1 => '1',
        Key::Num2 => '2',
        Key::Num3 => '3',
        Key::Num4 => '4',
        Key::Num5 => '5',
        Key::Num6 => '6',
        Key::Num7 => '7',
        Key::Num8 => '8',
        Key::Num9 => '9',
        _ => return None,
    };
    Some(KeyToken::Char(if shift { c.to_ascii_uppercase() } else { c }))
}
