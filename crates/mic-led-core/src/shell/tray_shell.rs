//! Tray shell: one icon, one popup menu, one event router.
//!
//! Owns the [`ActionRegistry`] built by [`MenuTreeBuilder`](crate::MenuTreeBuilder)
//! and routes platform messages to the double-click callback, the popup
//! menu or a registered menu action.

use crate::{
    ActionFn, ActionId, ActionRegistry, BuiltMenu, CoreError, CoreResult, Flow, IconControl,
    MenuTree, RegisteredAction, ShellEvent, TrayBackend, TrayIconState, TrayNotification,
    menu::materialize::materialize, shell::IconSlot,
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Tray icon owner and platform message router.
pub struct TrayShell<B: TrayBackend> {
    icon: IconSlot<B>,
    registry: ActionRegistry<B::Icon>,
    tree: MenuTree,
    double_click: Option<ActionFn<B::Icon>>,
    shut_down: bool,
}

impl<B: TrayBackend> TrayShell<B> {
    /// Materialize the popup menu and install the tray icon.
    ///
    /// # Errors
    ///
    /// Returns `IconRegistrationFailure` if the platform refuses the icon,
    /// or the backend error if the native menu cannot be built. Either is
    /// fatal; there is no degraded mode without an icon.
    #[track_caller]
    #[instrument(skip_all, fields(icon = ?icon))]
    pub fn initialize(
        mut backend: B,
        icon: B::Icon,
        tooltip: impl AsRef<str>,
        menu: BuiltMenu<B::Icon>,
        double_click: Option<ActionFn<B::Icon>>,
    ) -> CoreResult<Self> {
        let BuiltMenu { tree, registry } = menu;

        let popup = materialize(&mut backend, &tree)?;
        backend.set_popup_menu(popup)?;

        let mut slot = IconSlot::new(backend, tooltip.as_ref().to_string());
        slot.update_icon(icon)
            .map_err(|e| CoreError::IconRegistrationFailure {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(
            menu_nodes = tree.len(),
            actions = registry.len(),
            "Tray shell initialized"
        );

        Ok(Self {
            icon: slot,
            registry,
            tree,
            double_click,
            shut_down: false,
        })
    }

    /// Route one platform message.
    ///
    /// Callback errors are returned untouched. Once the shell is shut
    /// down every message is dropped and `Flow::Exit` returned, so no
    /// callback runs without an icon.
    ///
    /// # Errors
    ///
    /// Returns `UnknownActionId` for a command whose id was never
    /// registered, including submenu ids.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: ShellEvent) -> CoreResult<Flow> {
        if self.shut_down {
            debug!("Tray shell shut down, event dropped");
            return Ok(Flow::Exit);
        }

        match event {
            ShellEvent::Destroy => {
                self.shutdown();
                Ok(Flow::Exit)
            }
            ShellEvent::Command(id) => self.execute(id),
            ShellEvent::Tray(notification) => {
                self.notify(notification)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Swap the displayed icon, keeping the existing registration.
    ///
    /// Must be called on the thread that owns the shell; other threads
    /// marshal the request onto it.
    pub fn update_icon(&mut self, icon: B::Icon) -> CoreResult<()> {
        self.icon.update_icon(icon)
    }

    /// Remove the tray icon and mark the shell finished.
    ///
    /// Calling it again does nothing.
    #[instrument(skip(self))]
    pub fn shutdown(&mut self) {
        if self.shut_down {
            debug!("Tray shell already shut down");
            return;
        }
        self.shut_down = true;
        self.icon.remove();
        info!("Tray shell shut down");
    }

    /// Whether [`shutdown`](Self::shutdown) already ran.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Current icon registration state.
    pub fn icon_state(&self) -> TrayIconState {
        self.icon.state()
    }

    /// Tooltip given at initialization.
    pub fn tooltip(&self) -> &str {
        self.icon.tooltip()
    }

    /// The menu tree the popup was built from.
    pub fn menu(&self) -> &MenuTree {
        &self.tree
    }

    /// Registered menu actions.
    pub fn registry(&self) -> &ActionRegistry<B::Icon> {
        &self.registry
    }

    /// The platform backend.
    pub fn backend(&self) -> &B {
        &self.icon.backend
    }

    #[track_caller]
    fn execute(&mut self, id: ActionId) -> CoreResult<Flow> {
        match self.registry.get(id) {
            Some(RegisteredAction::Quit) => {
                info!(action_id = %id, "Quit selected");
                self.shutdown();
                Ok(Flow::Exit)
            }
            Some(RegisteredAction::Callback(action)) => {
                debug!(action_id = %id, "Menu action selected");
                action(&mut self.icon)?;
                Ok(Flow::Continue)
            }
            None => Err(CoreError::UnknownActionId {
                id,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    fn notify(&mut self, notification: TrayNotification) -> CoreResult<()> {
        match notification {
            TrayNotification::LeftDoubleClick => {
                if let Some(action) = &self.double_click {
                    action(&mut self.icon)?;
                }
            }
            TrayNotification::RightClickUp => self.icon.backend.show_popup_menu()?,
            // Single left clicks do nothing.
            TrayNotification::LeftClickUp | TrayNotification::Other => {}
        }
        Ok(())
    }
}

impl<B: TrayBackend> IconControl<B::Icon> for TrayShell<B> {
    fn update_icon(&mut self, icon: B::Icon) -> CoreResult<()> {
        TrayShell::update_icon(self, icon)
    }
}
