//! Native tray icon and popup menu, driven by the tray shell.
//!
//! Owns the hidden window the shell is attached to, the decoded icons
//! and the `tray-icon` handle. Menu items carry their [`ActionId`] as the
//! native menu id string.

use crate::{AppError, AppResult, IconSet, MuteState, TrayCommand};

use mic_led_core::{ActionId, CoreError, CoreResult, Insertion, TrayBackend};

use std::panic::Location;

use error_location::ErrorLocation;
use tao::{
    event_loop::EventLoopWindowTarget,
    window::{Window, WindowBuilder, WindowId},
};
use tracing::{debug, info, instrument};
use tray_icon::{
    TrayIcon, TrayIconBuilder,
    menu::{Menu, MenuId, MenuItem, Submenu},
};

/// A muda menu at either level.
pub enum NativeMenu {
    /// The top-level popup menu.
    Root(Menu),
    /// A nested submenu.
    Sub(Submenu),
}

/// System tray icon manager.
pub struct TrayManager {
    window: Window,
    icons: IconSet,
    popup: Option<Menu>,
    tray_icon: Option<TrayIcon>,
}

impl TrayManager {
    /// Create the hidden owner window. The icon is installed later by the
    /// tray shell.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn new(target: &EventLoopWindowTarget<TrayCommand>, icons: IconSet) -> AppResult<Self> {
        let window = WindowBuilder::new()
            .with_title("micLED")
            .with_visible(false)
            .build(target)
            .map_err(|e| AppError::WindowError {
                reason: format!("Failed to create hidden window: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("Hidden owner window created");

        Ok(Self {
            window,
            icons,
            popup: None,
            tray_icon: None,
        })
    }

    /// Id of the hidden owner window.
    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }
}

impl TrayBackend for TrayManager {
    type Icon = MuteState;
    type Menu = NativeMenu;

    const INSERTION: Insertion = Insertion::Tail;

    fn create_root_menu(&mut self) -> CoreResult<NativeMenu> {
        Ok(NativeMenu::Root(Menu::new()))
    }

    fn create_submenu(&mut self, id: ActionId, label: &str) -> CoreResult<NativeMenu> {
        Ok(NativeMenu::Sub(Submenu::with_id(menu_id(id), label, true)))
    }

    #[track_caller]
    fn insert_item(&mut self, parent: &NativeMenu, id: ActionId, label: &str) -> CoreResult<()> {
        let item = MenuItem::with_id(menu_id(id), label, true, None);
        let result = match parent {
            NativeMenu::Root(menu) => menu.append(&item),
            NativeMenu::Sub(submenu) => submenu.append(&item),
        };
        result.map_err(|e| backend_error(format!("Failed to add menu item '{label}': {e}")))
    }

    #[track_caller]
    fn insert_submenu(&mut self, parent: &NativeMenu, submenu: NativeMenu) -> CoreResult<()> {
        let NativeMenu::Sub(submenu) = submenu else {
            return Err(backend_error("Root menu cannot be nested".to_string()));
        };
        let result = match parent {
            NativeMenu::Root(menu) => menu.append(&submenu),
            NativeMenu::Sub(outer) => outer.append(&submenu),
        };
        result.map_err(|e| backend_error(format!("Failed to add submenu: {e}")))
    }

    #[track_caller]
    fn set_popup_menu(&mut self, menu: NativeMenu) -> CoreResult<()> {
        match menu {
            NativeMenu::Root(menu) => {
                self.popup = Some(menu);
                Ok(())
            }
            NativeMenu::Sub(_) => Err(backend_error("Popup must be a root menu".to_string())),
        }
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn install_icon(&mut self, icon: &MuteState, tooltip: &str) -> CoreResult<()> {
        let builder = TrayIconBuilder::new()
            .with_tooltip(tooltip)
            .with_icon(self.icons.get(*icon));

        // Windows pops the menu up from the shell's right-click handler.
        // Elsewhere the platform shows the attached menu itself.
        #[cfg(not(windows))]
        let builder = match &self.popup {
            Some(menu) => builder
                .with_menu(Box::new(menu.clone()))
                .with_menu_on_left_click(false),
            None => builder,
        };

        let tray_icon = builder
            .build()
            .map_err(|e| backend_error(format!("Failed to create tray icon: {e}")))?;
        self.tray_icon = Some(tray_icon);

        info!(state = %icon, "System tray icon installed");
        Ok(())
    }

    #[track_caller]
    fn modify_icon(&mut self, icon: &MuteState) -> CoreResult<()> {
        let Some(tray_icon) = &self.tray_icon else {
            return Err(backend_error("Tray icon is not installed".to_string()));
        };
        tray_icon
            .set_icon(Some(self.icons.get(*icon)))
            .map_err(|e| backend_error(format!("Failed to update icon: {e}")))
    }

    fn remove_icon(&mut self) -> CoreResult<()> {
        // Dropping the handle unregisters the icon.
        if self.tray_icon.take().is_some() {
            debug!("System tray icon removed");
        }
        Ok(())
    }

    #[cfg(windows)]
    #[track_caller]
    fn show_popup_menu(&mut self) -> CoreResult<()> {
        use tao::platform::windows::WindowExtWindows;
        use tray_icon::menu::ContextMenu;

        let Some(menu) = &self.popup else {
            return Err(backend_error("Popup menu was never built".to_string()));
        };

        // SAFETY: the hwnd belongs to the hidden window owned by self, which
        // outlives this call.
        unsafe {
            menu.show_context_menu_for_hwnd(self.window.hwnd(), None);
        }
        Ok(())
    }

    #[cfg(not(windows))]
    fn show_popup_menu(&mut self) -> CoreResult<()> {
        debug!("Popup menu is shown by the platform tray");
        Ok(())
    }
}

fn menu_id(id: ActionId) -> MenuId {
    MenuId::new(id.to_string())
}

#[track_caller]
fn backend_error(reason: String) -> CoreError {
    CoreError::Backend {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}
