//! Microphone mute switching through an external command.
//!
//! The command runs synchronously on the caller's thread. An optional HTTP
//! notification is fired on the tokio runtime afterwards and never waited
//! for.

use crate::{AppError, AppResult, MuteState, config::MuteConfig};

use mic_led_core::{CoreResult, IconControl};

use std::{
    panic::Location,
    process::Command,
    sync::{Mutex, PoisonError},
    time::Duration,
};

use error_location::ErrorLocation;
use reqwest::Client;
use tokio::runtime::Handle;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Timeout for the state-change notification request.
const NOTIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Placeholder in `notify_url` replaced by the new state.
const STATE_PLACEHOLDER: &str = "{state}";

/// Hides the console window the mute command would otherwise flash.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Shared mute switch used by the menu, the double-click and the chord
/// listener.
pub struct MuteToggle {
    state: Mutex<MuteState>,
    config: MuteConfig,
    client: Client,
    runtime: Handle,
}

impl MuteToggle {
    /// Create a toggle that believes the microphone is in `initial` state.
    ///
    /// No command runs here; call [`set`](Self::set) to force a state.
    #[track_caller]
    pub fn new(config: MuteConfig, initial: MuteState, runtime: Handle) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(NOTIFY_TIMEOUT)
            .build()
            .map_err(|e| AppError::NotificationError {
                reason: format!("Failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            state: Mutex::new(initial),
            config,
            client,
            runtime,
        })
    }

    /// Current believed state.
    #[track_caller]
    pub fn current(&self) -> AppResult<MuteState> {
        let state = self.state.lock().map_err(|e| poisoned(&e))?;
        Ok(*state)
    }

    /// Flip the state and return the new one.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn invoke(&self) -> AppResult<MuteState> {
        let mut state = self.state.lock().map_err(|e| poisoned(&e))?;
        let target = state.toggled();
        self.apply(&mut state, target)?;
        Ok(target)
    }

    /// Flip the state and show its icon. Call on the thread owning the tray.
    pub fn invoke_and_show(&self, icons: &mut dyn IconControl<MuteState>) -> CoreResult<()> {
        let state = self.invoke()?;
        icons.update_icon(state)
    }

    /// Force a state. Runs the command even if the state already matches,
    /// since the device may have been changed outside this process.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn set(&self, target: MuteState) -> AppResult<MuteState> {
        let mut state = self.state.lock().map_err(|e| poisoned(&e))?;
        self.apply(&mut state, target)?;
        Ok(target)
    }

    #[track_caller]
    fn apply(&self, state: &mut MuteState, target: MuteState) -> AppResult<()> {
        let toggle_id = Uuid::new_v4();

        self.run_command(target, toggle_id)?;
        *state = target;

        info!(%toggle_id, state = %target, "Microphone state changed");

        self.notify(target, toggle_id);
        Ok(())
    }

    #[track_caller]
    fn run_command(&self, target: MuteState, toggle_id: Uuid) -> AppResult<()> {
        if self.config.program.trim().is_empty() {
            debug!(%toggle_id, "No mute program configured, skipping command");
            return Ok(());
        }

        let args = match target {
            MuteState::Muted => &self.config.mute_args,
            MuteState::Unmuted => &self.config.unmute_args,
        };

        let mut command = Command::new(&self.config.program);
        command.args(args);

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        debug!(%toggle_id, program = %self.config.program, ?args, "Running mute command");

        let status = command.status().map_err(|e| AppError::MuteCommandFailed {
            reason: format!("Failed to run '{}': {}", self.config.program, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !status.success() {
            return Err(AppError::MuteCommandFailed {
                reason: format!("'{}' exited with {}", self.config.program, status),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    fn notify(&self, target: MuteState, toggle_id: Uuid) {
        let Some(template) = &self.config.notify_url else {
            return;
        };

        let url = template.replace(STATE_PLACEHOLDER, target.as_str());
        let client = self.client.clone();

        self.runtime.spawn(async move {
            match client.get(&url).send().await {
                Ok(response) => {
                    debug!(%toggle_id, status = %response.status(), "State notification sent");
                }
                Err(e) => warn!(%toggle_id, error = %e, "State notification failed"),
            }
        });
    }
}

#[track_caller]
fn poisoned<T>(_: &PoisonError<T>) -> AppError {
    AppError::StatePoisoned {
        location: ErrorLocation::from(Location::caller()),
    }
}
