use mic_led_core::{ShellEvent, TrayNotification};

use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent};

/// Commands delivered to the main UI thread through the event loop proxy.
///
/// The main thread owns the tray shell (because `TrayIcon` is `!Send`),
/// so menu clicks, tray clicks and chord presses all flow through this
/// enum. Commands carry no mute state; the main thread reads and changes
/// it, so the icon always shows the latest state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayCommand {
    /// A platform message for the tray shell.
    Platform(ShellEvent),
    /// The mute chord was pressed.
    ToggleMute,
}

/// Classify a tray icon event.
pub fn notification_of(event: &TrayIconEvent) -> TrayNotification {
    match event {
        TrayIconEvent::DoubleClick {
            button: MouseButton::Left,
            ..
        } => TrayNotification::LeftDoubleClick,
        TrayIconEvent::Click {
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            ..
        } => TrayNotification::LeftClickUp,
        TrayIconEvent::Click {
            button: MouseButton::Right,
            button_state: MouseButtonState::Up,
            ..
        } => TrayNotification::RightClickUp,
        _ => TrayNotification::Other,
    }
}
