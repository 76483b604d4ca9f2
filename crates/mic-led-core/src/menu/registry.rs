use crate::{ActionFn, ActionId, CoreError, CoreResult};

use std::{collections::BTreeMap, fmt, panic::Location};

use error_location::ErrorLocation;

/// What a registered id does when its command arrives.
pub enum RegisteredAction<I> {
    /// The reserved terminal entry: shuts the shell down.
    Quit,
    /// Caller-supplied callback.
    Callback(ActionFn<I>),
}

impl<I> fmt::Debug for RegisteredAction<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisteredAction::Quit => f.write_str("Quit"),
            RegisteredAction::Callback(_) => f.write_str("Callback"),
        }
    }
}

/// Maps leaf ids to their actions. Populated once by the builder.
pub struct ActionRegistry<I> {
    actions: BTreeMap<ActionId, RegisteredAction<I>>,
}

impl<I> ActionRegistry<I> {
    pub(crate) fn new() -> Self {
        Self {
            actions: BTreeMap::new(),
        }
    }

    #[track_caller]
    pub(crate) fn insert(&mut self, id: ActionId, action: RegisteredAction<I>) -> CoreResult<()> {
        if self.actions.contains_key(&id) {
            return Err(CoreError::DuplicateActionId {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.actions.insert(id, action);
        Ok(())
    }

    /// Look up the action for `id`.
    pub fn get(&self, id: ActionId) -> Option<&RegisteredAction<I>> {
        self.actions.get(&id)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: ActionId) -> bool {
        self.actions.contains_key(&id)
    }

    /// Number of registered leaves, Quit included.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.actions.keys().copied()
    }

    /// Id of the Quit entry.
    pub fn quit_id(&self) -> Option<ActionId> {
        self.actions
            .iter()
            .find(|(_, action)| matches!(action, RegisteredAction::Quit))
            .map(|(id, _)| *id)
    }
}

impl<I> fmt::Debug for ActionRegistry<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.actions.iter()).finish()
    }
}
