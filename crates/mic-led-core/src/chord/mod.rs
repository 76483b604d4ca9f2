mod detector;
mod key_token;

pub use {
    detector::{Chord, ChordDetector},
    key_token::KeyToken,
};
