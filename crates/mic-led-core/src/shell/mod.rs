mod backend;
mod event;
mod icon_state;
mod tray_shell;

pub(crate) use icon_state::IconSlot;

pub use {
    backend::{Insertion, TrayBackend},
    event::{Flow, ShellEvent, TrayNotification},
    icon_state::{IconControl, TrayIconState},
    tray_shell::TrayShell,
};
