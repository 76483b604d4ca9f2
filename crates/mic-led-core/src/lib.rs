//! micLED Core Library
//!
//! Platform-independent pieces of the micLED tray utility: the menu tree
//! builder and action registry, the tray shell event router, and the
//! modifier-key chord detector.
//!
//! # Example
//!
//! ```
//! use mic_led_core::{ChordDetector, KeyToken, MenuEntry, MenuTreeBuilder};
//!
//! # fn main() -> mic_led_core::CoreResult<()> {
//! let menu = MenuTreeBuilder::<&'static str>::build(vec![
//!     MenuEntry::action("Toggle", |icons| icons.update_icon("muted")),
//!     MenuEntry::submenu("More", vec![MenuEntry::action("About", |_| Ok(()))]),
//! ])?;
//! assert_eq!(menu.tree.len(), 4);
//!
//! let mut fired = 0;
//! let chord = [KeyToken::Super, KeyToken::Char('z')].into_iter().collect();
//! let mut detector = ChordDetector::new(vec![chord], || fired += 1)?;
//! detector.on_key_down(KeyToken::Super);
//! detector.on_key_down(KeyToken::Char('z'));
//! drop(detector);
//! assert_eq!(fired, 1);
//! # Ok(())
//! # }
//! ```

mod chord;
mod error;
mod menu;
mod shell;

pub use {
    chord::{Chord, ChordDetector, KeyToken},
    error::{CoreError, Result as CoreResult},
    menu::{
        ActionFn, ActionId, ActionRegistry, BuiltMenu, MenuEntry, MenuNode, MenuTarget, MenuTree,
        MenuTreeBuilder, QUIT_LABEL, RegisteredAction,
    },
    shell::{
        Flow, IconControl, Insertion, ShellEvent, TrayBackend, TrayIconState, TrayNotification,
        TrayShell,
    },
};

#[cfg(test)]
mod tests;
