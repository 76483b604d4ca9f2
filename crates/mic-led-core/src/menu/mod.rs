mod action_id;
mod builder;
mod entry;
pub(crate) mod materialize;
mod registry;
mod tree;

pub use {
    action_id::ActionId,
    builder::{BuiltMenu, MenuTreeBuilder, QUIT_LABEL},
    entry::{ActionFn, MenuEntry, MenuTarget},
    registry::{ActionRegistry, RegisteredAction},
    tree::{MenuNode, MenuTree},
};
