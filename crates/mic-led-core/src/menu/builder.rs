//! Turns nested menu entries into a [`MenuTree`] and its
//! [`ActionRegistry`].
//!
//! Ids come from one counter seeded at [`ActionId::SEED`] and bumped once
//! per node in pre-order. The reserved Quit leaf is appended after the
//! caller's entries, so it always holds the highest id.

use crate::{
    ActionId, ActionRegistry, CoreError, CoreResult, MenuEntry, MenuNode, MenuTarget, MenuTree,
    RegisteredAction,
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Label of the reserved terminal entry.
pub const QUIT_LABEL: &str = "Quit";

/// Output of [`MenuTreeBuilder::build`].
#[derive(Debug)]
pub struct BuiltMenu<I> {
    /// Native-menu-ready tree.
    pub tree: MenuTree,
    /// One entry per leaf, Quit included.
    pub registry: ActionRegistry<I>,
}

/// One-shot builder. The id counter dies with it.
pub struct MenuTreeBuilder<I> {
    last_id: ActionId,
    registry: ActionRegistry<I>,
}

impl<I> MenuTreeBuilder<I> {
    /// Build a tree from `entries`, appending the Quit leaf.
    ///
    /// # Errors
    ///
    /// Returns `MalformedMenuSpec` when any entry has a blank label or a
    /// submenu has no children. All entries are checked before
    /// any id is assigned.
    #[track_caller]
    #[instrument(skip_all, fields(entries = entries.len()))]
    pub fn build(entries: Vec<MenuEntry<I>>) -> CoreResult<BuiltMenu<I>> {
        validate(&entries, &mut Vec::new())?;

        let mut builder = Self {
            last_id: ActionId::SEED,
            registry: ActionRegistry::new(),
        };

        let mut nodes = Vec::with_capacity(entries.len() + 1);
        for entry in entries {
            nodes.push(builder.visit(entry)?);
        }

        let quit_id = builder.assign();
        builder.registry.insert(quit_id, RegisteredAction::Quit)?;
        nodes.push(MenuNode::Leaf {
            id: quit_id,
            label: QUIT_LABEL.to_string(),
        });

        let tree = MenuTree::new(nodes);
        debug!(
            nodes = tree.len(),
            actions = builder.registry.len(),
            quit_id = %quit_id,
            "Menu tree built"
        );

        Ok(BuiltMenu {
            tree,
            registry: builder.registry,
        })
    }

    fn assign(&mut self) -> ActionId {
        self.last_id = self.last_id.next();
        self.last_id
    }

    fn visit(&mut self, entry: MenuEntry<I>) -> CoreResult<MenuNode> {
        let id = self.assign();
        match entry.target {
            MenuTarget::Action(action) => {
                self.registry
                    .insert(id, RegisteredAction::Callback(action))?;
                Ok(MenuNode::Leaf {
                    id,
                    label: entry.label,
                })
            }
            MenuTarget::Submenu(children) => {
                let mut nodes = Vec::with_capacity(children.len());
                for child in children {
                    nodes.push(self.visit(child)?);
                }
                Ok(MenuNode::SubMenu {
                    id,
                    label: entry.label,
                    children: nodes,
                })
            }
        }
    }
}

#[track_caller]
fn validate<I>(entries: &[MenuEntry<I>], path: &mut Vec<String>) -> CoreResult<()> {
    for entry in entries {
        let label = entry.label.trim();
        if label.is_empty() {
            path.push("(unnamed)".to_string());
            return Err(malformed(path, "label is empty"));
        }

        path.push(label.to_string());
        if let MenuTarget::Submenu(children) = &entry.target {
            if children.is_empty() {
                return Err(malformed(path, "submenu has no entries"));
            }
            validate(children, path)?;
        }
        path.pop();
    }
    Ok(())
}

#[track_caller]
fn malformed(path: &[String], reason: &str) -> CoreError {
    CoreError::MalformedMenuSpec {
        path: path.join(" > "),
        reason: reason.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
