use crate::ActionId;

/// A node of a built menu tree. Callbacks live in the
/// [`ActionRegistry`](crate::ActionRegistry), keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    /// Selectable item.
    Leaf {
        /// Routing id.
        id: ActionId,
        /// Display text.
        label: String,
    },
    /// Nested menu. Never invocable itself.
    SubMenu {
        /// Id reserved for the submenu node.
        id: ActionId,
        /// Display text.
        label: String,
        /// Children in display order.
        children: Vec<MenuNode>,
    },
}

impl MenuNode {
    /// The node's id.
    pub fn id(&self) -> ActionId {
        match self {
            MenuNode::Leaf { id, .. } | MenuNode::SubMenu { id, .. } => *id,
        }
    }

    /// The node's label.
    pub fn label(&self) -> &str {
        match self {
            MenuNode::Leaf { label, .. } | MenuNode::SubMenu { label, .. } => label,
        }
    }

    fn collect_ids(&self, out: &mut Vec<ActionId>) {
        out.push(self.id());
        if let MenuNode::SubMenu { children, .. } = self {
            for child in children {
                child.collect_ids(out);
            }
        }
    }
}

/// Top-level menu nodes, the reserved Quit leaf last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
}

impl MenuTree {
    pub(crate) fn new(nodes: Vec<MenuNode>) -> Self {
        Self { nodes }
    }

    /// Top-level nodes in display order.
    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    /// Every id in pre-order.
    pub fn ids_pre_order(&self) -> Vec<ActionId> {
        let mut ids = Vec::new();
        for node in &self.nodes {
            node.collect_ids(&mut ids);
        }
        ids
    }

    /// Total node count, leaves and submenus.
    pub fn len(&self) -> usize {
        self.ids_pre_order().len()
    }

    /// Never true for a built tree: Quit is always present.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the reserved Quit leaf.
    pub fn quit_id(&self) -> Option<ActionId> {
        self.nodes.last().map(MenuNode::id)
    }
}
