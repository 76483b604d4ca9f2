use crate::ActionId;

use error_location::ErrorLocation;
use thiserror::Error;

/// Tray shell, menu and chord errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A menu entry could not be turned into a menu node.
    #[error("Malformed menu entry at '{path}': {reason} {location}")]
    MalformedMenuSpec {
        /// Labels leading to the offending entry, joined with " > ".
        path: String,
        /// Why the entry was rejected.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The tray icon could not be installed with the platform shell.
    #[error("Tray icon registration failed: {reason} {location}")]
    IconRegistrationFailure {
        /// Description of the platform failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A command referenced an id that the registry never handed out.
    #[error("Unknown action id: {id} {location}")]
    UnknownActionId {
        /// The id carried by the command message.
        id: ActionId,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Two registry entries were assigned the same id.
    #[error("Duplicate action id: {id} {location}")]
    DuplicateActionId {
        /// The id registered twice.
        id: ActionId,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A key combination cannot be detected.
    #[error("Invalid chord: {reason} {location}")]
    InvalidChord {
        /// Why the chord set was rejected.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A key name could not be parsed.
    #[error("Invalid key token '{token}' {location}")]
    InvalidKeyToken {
        /// The unparsed key name.
        token: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A native menu or icon call failed after startup.
    #[error("Tray backend error: {reason} {location}")]
    Backend {
        /// Description of the platform failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A menu or double-click callback reported a failure.
    #[error("Action failed: {source} {location}")]
    ActionFailed {
        /// Error returned by the callback's collaborator.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Whether the process must stop instead of logging and carrying on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CoreError::MalformedMenuSpec { .. }
                | CoreError::IconRegistrationFailure { .. }
                | CoreError::UnknownActionId { .. }
        )
    }
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
