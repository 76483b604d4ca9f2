use crate::ActionId;

/// Platform messages routed by [`TrayShell`](crate::TrayShell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// The owning window is being destroyed.
    Destroy,
    /// A popup menu item was selected.
    Command(ActionId),
    /// Mouse activity on the tray icon.
    Tray(TrayNotification),
}

/// Tray icon sub-events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayNotification {
    /// Left button double-click.
    LeftDoubleClick,
    /// Left button released. Ignored.
    LeftClickUp,
    /// Right button released. Opens the popup menu.
    RightClickUp,
    /// Hover, move and anything else the platform reports.
    Other,
}

/// What the event loop should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep pumping messages.
    Continue,
    /// The shell shut down; leave the loop.
    Exit,
}
