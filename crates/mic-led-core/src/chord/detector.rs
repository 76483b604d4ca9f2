//! Modifier-key chord detection.
//!
//! Several alternative combinations can be registered (e.g. `super+z` and
//! `super+Z`). The callback fires when the held set goes from satisfying
//! none of them to satisfying at least one, and not again until a key
//! release leaves every combination unsatisfied. Key order and OS
//! auto-repeat do not matter.

use crate::{CoreError, CoreResult, KeyToken};

use std::{collections::BTreeSet, fmt, panic::Location};

use error_location::ErrorLocation;
use tracing::{debug, instrument, trace};

/// A set of keys that must be held together.
pub type Chord = BTreeSet<KeyToken>;

/// Tracks held keys and fires once per chord completion.
pub struct ChordDetector<F> {
    combinations: Vec<Chord>,
    held: BTreeSet<KeyToken>,
    satisfied: bool,
    on_fire: F,
}

impl<F: FnMut()> ChordDetector<F> {
    /// Create a detector for `combinations`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChord` if no combination is given or one of them is
    /// empty, since an empty chord would be satisfied with nothing held.
    #[track_caller]
    pub fn new(combinations: Vec<Chord>, on_fire: F) -> CoreResult<Self> {
        if combinations.is_empty() {
            return Err(CoreError::InvalidChord {
                reason: "no key combinations configured".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(index) = combinations.iter().position(|chord| chord.is_empty()) {
            return Err(CoreError::InvalidChord {
                reason: format!("combination #{index} has no keys"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            combinations,
            held: BTreeSet::new(),
            satisfied: false,
            on_fire,
        })
    }

    /// Record a key press. Returns true when the callback fired.
    #[instrument(level = "trace", skip(self))]
    pub fn on_key_down(&mut self, key: KeyToken) -> bool {
        if !self.is_tracked(key) {
            return false;
        }

        self.held.insert(key);
        let now_satisfied = self.any_satisfied();
        let was_satisfied = std::mem::replace(&mut self.satisfied, now_satisfied);

        if self.satisfied && !was_satisfied {
            debug!(held = ?self.held, "Chord completed");
            (self.on_fire)();
            return true;
        }
        false
    }

    /// Record a key release. Never fires; unknown or unheld keys are ignored.
    #[instrument(level = "trace", skip(self))]
    pub fn on_key_up(&mut self, key: KeyToken) {
        if !self.is_tracked(key) {
            return;
        }

        if !self.held.remove(&key) {
            trace!("Release without matching press");
        }
        self.satisfied = self.any_satisfied();
    }

    /// Registered combinations, in construction order.
    pub fn combinations(&self) -> &[Chord] {
        &self.combinations
    }

    /// Tracked keys currently held.
    pub fn held(&self) -> &BTreeSet<KeyToken> {
        &self.held
    }

    /// Whether some combination is currently satisfied.
    pub fn is_satisfied(&self) -> bool {
        self.satisfied
    }

    fn is_tracked(&self, key: KeyToken) -> bool {
        self.combinations.iter().any(|chord| chord.contains(&key))
    }

    fn any_satisfied(&self) -> bool {
        self.combinations
            .iter()
            .any(|chord| chord.is_subset(&self.held))
    }
}

impl<F> fmt::Debug for ChordDetector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChordDetector")
            .field("combinations", &self.combinations)
            .field("held", &self.held)
            .field("satisfied", &self.satisfied)
            .finish()
    }
}
