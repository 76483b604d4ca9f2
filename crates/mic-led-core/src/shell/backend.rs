//! Platform seam for the tray shell.
//!
//! The shell's routing, menu ordering and icon registration rules live in
//! this crate; a backend only performs the individual native calls.

use crate::{ActionId, CoreResult};

use std::fmt::Debug;

/// Where a native menu API puts a newly inserted item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Before all existing items. Siblings are fed in reverse.
    Head,
    /// After all existing items. Siblings are fed in order.
    Tail,
}

/// Native tray icon, popup menu and window calls.
pub trait TrayBackend {
    /// Opaque icon handle. Passed through, never inspected.
    type Icon: Clone + Debug;
    /// Native menu or submenu handle.
    type Menu;

    /// Insertion semantics of [`insert_item`](Self::insert_item) and
    /// [`insert_submenu`](Self::insert_submenu).
    const INSERTION: Insertion;

    /// Create the empty top-level popup menu.
    fn create_root_menu(&mut self) -> CoreResult<Self::Menu>;

    /// Create an empty submenu that will later be attached to a parent.
    fn create_submenu(&mut self, id: ActionId, label: &str) -> CoreResult<Self::Menu>;

    /// Insert a selectable item into `parent`.
    fn insert_item(&mut self, parent: &Self::Menu, id: ActionId, label: &str) -> CoreResult<()>;

    /// Attach a fully populated submenu to `parent`.
    fn insert_submenu(&mut self, parent: &Self::Menu, submenu: Self::Menu) -> CoreResult<()>;

    /// Hand the finished popup menu to the backend for later display.
    fn set_popup_menu(&mut self, menu: Self::Menu) -> CoreResult<()>;

    /// First registration of the tray icon with the platform shell.
    fn install_icon(&mut self, icon: &Self::Icon, tooltip: &str) -> CoreResult<()>;

    /// Swap the image of an already registered tray icon.
    fn modify_icon(&mut self, icon: &Self::Icon) -> CoreResult<()>;

    /// Remove the tray icon registration.
    fn remove_icon(&mut self) -> CoreResult<()>;

    /// Take foreground focus and show the popup menu at the pointer.
    fn show_popup_menu(&mut self) -> CoreResult<()>;
}
