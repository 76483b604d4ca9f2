use crate::{CoreResult, TrayBackend};

use tracing::{debug, instrument, warn};

/// Registration state of the single tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// Nothing installed yet.
    Unregistered,
    /// Installed; further changes must modify, never re-install.
    Registered,
    /// Removed at shutdown. Terminal.
    Removed,
}

/// Icon updates available to callbacks.
pub trait IconControl<I> {
    /// Show `icon` in the tray, reusing the existing registration.
    fn update_icon(&mut self, icon: I) -> CoreResult<()>;
}

/// The backend plus the registration bookkeeping that guards it.
pub(crate) struct IconSlot<B: TrayBackend> {
    pub(crate) backend: B,
    state: TrayIconState,
    tooltip: String,
}

impl<B: TrayBackend> IconSlot<B> {
    pub(crate) fn new(backend: B, tooltip: String) -> Self {
        Self {
            backend,
            state: TrayIconState::Unregistered,
            tooltip,
        }
    }

    pub(crate) fn state(&self) -> TrayIconState {
        self.state
    }

    pub(crate) fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Remove the registration. Returns false when there was nothing to remove.
    #[instrument(skip(self))]
    pub(crate) fn remove(&mut self) -> bool {
        let previous = std::mem::replace(&mut self.state, TrayIconState::Removed);
        if previous != TrayIconState::Registered {
            return false;
        }
        if let Err(e) = self.backend.remove_icon() {
            warn!(error = ?e, "Failed to remove tray icon");
        }
        true
    }
}

impl<B: TrayBackend> IconControl<B::Icon> for IconSlot<B> {
    #[instrument(skip(self))]
    fn update_icon(&mut self, icon: B::Icon) -> CoreResult<()> {
        match self.state {
            TrayIconState::Unregistered => {
                self.backend.install_icon(&icon, &self.tooltip)?;
                self.state = TrayIconState::Registered;
            }
            TrayIconState::Registered => self.backend.modify_icon(&icon)?,
            TrayIconState::Removed => debug!("Tray icon already removed, update ignored"),
        }
        Ok(())
    }
}
