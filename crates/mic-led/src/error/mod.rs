use mic_led_core::CoreError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the mic-led binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Tray shell, menu or chord error from mic-led-core.
    #[error("Core error: {source} {location}")]
    Core {
        /// The underlying core error.
        #[source]
        source: CoreError,
        /// Call site that produced the error.
        location: ErrorLocation,
    },

    /// Configuration loading or parsing error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// What went wrong.
        reason: String,
        /// Call site that produced the error.
        location: ErrorLocation,
    },

    /// Logging could not be set up.
    #[error("Logging setup failed: {reason} {location}")]
    LoggingError {
        /// What went wrong.
        reason: String,
        /// Call site that produced the error.
        location: ErrorLocation,
    },

    /// The hidden owner window could not be created.
    #[error("Window creation failed: {reason} {location}")]
    WindowError {
        /// What went wrong.
        reason: String,
        /// Call site that produced the error.
        location: ErrorLocation,
    },

    /// An icon image could not be loaded or converted.
    #[error("Icon error: {reason} {location}")]
    IconError {
        /// What went wrong.
        reason: String,
        /// Call site that produced the error.
        location: ErrorLocation,
    },

    /// The external mute command failed to run or exited unsuccessfully.
    #[error("Mute command failed: {reason} {location}")]
    MuteCommandFailed {
        /// What went wrong.
        reason: String,
        /// Call site that produced the error.
        location: ErrorLocation,
    },

    /// The mute state lock was poisoned by a panicking toggle.
    #[error("Mute state lock poisoned {location}")]
    StatePoisoned {
        /// Call site that produced the error.
        location: ErrorLocation,
    },

    /// The notification HTTP client could not be built.
    #[error("Notification client error: {reason} {location}")]
    NotificationError {
        /// What went wrong.
        reason: String,
        /// Call site that produced the error.
        location: ErrorLocation,
    },

    /// The keyboard listener could not be started.
    #[error("Keyboard listener error: {reason} {location}")]
    ListenerError {
        /// What went wrong.
        reason: String,
        /// Call site that produced the error.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Call site that produced the error.
        location: ErrorLocation,
    },
}

// #[from] cannot fill the location field.
impl From<CoreError> for AppError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        AppError::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

// Menu callbacks report failures to the tray shell as CoreError.
impl From<AppError> for CoreError {
    #[track_caller]
    fn from(source: AppError) -> Self {
        CoreError::ActionFailed {
            source: Box::new(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
