//! Global key chord listener.
//!
//! Watches every key press system-wide with `rdev` on a dedicated thread
//! and calls back whenever one of the configured combinations completes.

use crate::{AppError, AppResult, KeyTranslator};

use mic_led_core::{Chord, ChordDetector};

use std::{
    panic::Location,
    thread::{self, JoinHandle},
};

use error_location::ErrorLocation;
use rdev::{Event, EventType};
use tracing::{error, info, instrument, trace};

/// Name of the listener thread, visible in logs and debuggers.
const LISTENER_THREAD: &str = "chord-listener";

/// Handle to the running chord listener thread.
pub struct HotkeyHandler {
    _thread: JoinHandle<()>,
}

impl HotkeyHandler {
    /// Validate `combinations` and start listening.
    ///
    /// `on_fire` runs on the listener thread. It must not touch the tray
    /// directly; send a command to the event loop instead.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChord` (wrapped) for an empty or unusable chord list,
    /// or `ListenerError` if the thread cannot be spawned. A listener that
    /// fails after starting only logs; the tray keeps working.
    #[track_caller]
    #[instrument(skip(on_fire))]
    pub fn spawn<F>(combinations: Vec<Chord>, on_fire: F) -> AppResult<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let mut detector = ChordDetector::new(combinations, on_fire)?;
        let mut translator = KeyTranslator::new();

        let thread = thread::Builder::new()
            .name(LISTENER_THREAD.to_string())
            .spawn(move || {
                info!("Chord listener started");
                let result = rdev::listen(move |event: Event| match event.event_type {
                    EventType::KeyPress(key) => {
                        if let Some(token) = translator.press(key, event.name.as_deref()) {
                            trace!(?key, %token, "Key down");
                            detector.on_key_down(token);
                        }
                    }
                    EventType::KeyRelease(key) => {
                        if let Some(token) = translator.release(key) {
                            trace!(?key, %token, "Key up");
                            detector.on_key_up(token);
                        }
                    }
                    _ => {}
                });

                if let Err(e) = result {
                    error!(error = ?e, "Chord listener stopped; mute hotkey unavailable");
                }
            })
            .map_err(|e| AppError::ListenerError {
                reason: format!("Failed to spawn listener thread: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { _thread: thread })
    }
}
