use crate::{CoreResult, Insertion, MenuNode, MenuTree, TrayBackend};

/// Build the native popup menu for `tree`.
///
/// Head-inserting backends receive siblings last-first so the displayed
/// order matches the tree; tail-appending backends receive them as is.
pub(crate) fn materialize<B: TrayBackend>(backend: &mut B, tree: &MenuTree) -> CoreResult<B::Menu> {
    let root = backend.create_root_menu()?;
    fill(backend, &root, tree.nodes())?;
    Ok(root)
}

fn fill<B: TrayBackend>(backend: &mut B, parent: &B::Menu, nodes: &[MenuNode]) -> CoreResult<()> {
    let mut ordered: Vec<&MenuNode> = nodes.iter().collect();
    if B::INSERTION == Insertion::Head {
        ordered.reverse();
    }

    for node in ordered {
        match node {
            MenuNode::Leaf { id, label } => backend.insert_item(parent, *id, label)?,
            MenuNode::SubMenu {
                id,
                label,
                children,
            } => {
                let submenu = backend.create_submenu(*id, label)?;
                fill(backend, &submenu, children)?;
                backend.insert_submenu(parent, submenu)?;
            }
        }
    }
    Ok(())
}
