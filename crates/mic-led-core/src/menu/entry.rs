use crate::{CoreResult, IconControl};

use std::fmt;

/// Callback attached to a menu leaf or to the tray double-click.
///
/// Receives the shell's icon control so it can swap the tray icon.
pub type ActionFn<I> = Box<dyn Fn(&mut dyn IconControl<I>) -> CoreResult<()>>;

/// One entry of a caller-supplied menu description.
pub struct MenuEntry<I> {
    /// Text shown in the popup menu.
    pub label: String,
    /// What selecting the entry does.
    pub target: MenuTarget<I>,
}

/// Leaf callback or nested entries.
pub enum MenuTarget<I> {
    /// Invoke the callback when selected.
    Action(ActionFn<I>),
    /// Open a submenu with these entries, in display order.
    Submenu(Vec<MenuEntry<I>>),
}

impl<I> MenuEntry<I> {
    /// A leaf entry.
    pub fn action<F>(label: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut dyn IconControl<I>) -> CoreResult<()> + 'static,
    {
        Self {
            label: label.into(),
            target: MenuTarget::Action(Box::new(action)),
        }
    }

    /// A submenu entry.
    pub fn submenu(label: impl Into<String>, children: Vec<MenuEntry<I>>) -> Self {
        Self {
            label: label.into(),
            target: MenuTarget::Submenu(children),
        }
    }
}

impl<I> fmt::Debug for MenuEntry<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            MenuTarget::Action(_) => f.debug_tuple("Action").field(&self.label).finish(),
            MenuTarget::Submenu(children) => f
                .debug_struct("Submenu")
                .field("label", &self.label)
                .field("children", children)
                .finish(),
        }
    }
}
