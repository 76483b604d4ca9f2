//! `[[menu]]` entries and their conversion into core menu entries.

use crate::{AppError, AppResult, MenuAction};

use mic_led_core::{ActionFn, CoreError, MenuEntry, MenuTarget};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// One configured popup menu entry.
///
/// Exactly one of `action` and `items` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuEntryConfig {
    /// Text shown in the menu.
    pub label: String,
    /// Built-in action run when the entry is selected.
    #[serde(default)]
    pub action: Option<MenuAction>,
    /// Nested entries of a submenu.
    #[serde(default)]
    pub items: Option<Vec<MenuEntryConfig>>,
}

impl MenuEntryConfig {
    /// A leaf entry.
    pub fn action(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action: Some(action),
            items: None,
        }
    }

    /// A submenu entry.
    pub fn submenu(label: impl Into<String>, items: Vec<MenuEntryConfig>) -> Self {
        Self {
            label: label.into(),
            action: None,
            items: Some(items),
        }
    }
}

/// Convert configured entries into core menu entries, asking `make` for
/// the callback of each leaf.
///
/// Label and submenu emptiness checks happen in the core builder; this
/// only rejects entries that are neither or both of leaf and submenu.
#[track_caller]
pub fn build_menu_entries<I, F>(
    entries: &[MenuEntryConfig],
    make: &mut F,
) -> AppResult<Vec<MenuEntry<I>>>
where
    F: FnMut(MenuAction) -> ActionFn<I>,
{
    let mut path = Vec::new();
    convert(entries, make, &mut path, Location::caller())
}

fn convert<I, F>(
    entries: &[MenuEntryConfig],
    make: &mut F,
    path: &mut Vec<String>,
    caller: &'static Location<'static>,
) -> AppResult<Vec<MenuEntry<I>>>
where
    F: FnMut(MenuAction) -> ActionFn<I>,
{
    let mut converted = Vec::with_capacity(entries.len());
    for entry in entries {
        path.push(entry.label.clone());
        let result = match (&entry.action, &entry.items) {
            (Some(action), None) => Ok(MenuEntry {
                label: entry.label.clone(),
                target: MenuTarget::Action(make(*action)),
            }),
            (None, Some(items)) => convert(items, make, path, caller)
                .map(|children| MenuEntry::submenu(entry.label.clone(), children)),
            (Some(_), Some(_)) => Err(malformed(path, "has both 'action' and 'items'", caller)),
            (None, None) => Err(malformed(path, "needs 'action' or 'items'", caller)),
        };
        path.pop();
        converted.push(result?);
    }
    Ok(converted)
}

fn malformed(
    path: &[String],
    reason: &str,
    caller: &'static Location<'static>,
) -> AppError {
    CoreError::MalformedMenuSpec {
        path: path.join(" > "),
        reason: reason.to_string(),
        location: ErrorLocation::from(caller),
    }
    .into()
}
