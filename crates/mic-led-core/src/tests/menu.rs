use crate::{
    ActionId, CoreError, MenuEntry, MenuNode, MenuTreeBuilder, QUIT_LABEL, RegisteredAction,
};

type Entry = MenuEntry<&'static str>;

fn noop(label: &str) -> Entry {
    MenuEntry::action(label, |_| Ok(()))
}

fn sample_entries() -> Vec<Entry> {
    vec![
        noop("First option"),
        MenuEntry::submenu(
            "A sub-menu",
            vec![
                noop("Second option"),
                MenuEntry::submenu("Deeper", vec![noop("Third option")]),
            ],
        ),
        noop("Last option"),
    ]
}

/// WHAT: Ids are assigned in pre-order starting at the first id
/// WHY: Command routing depends on every node having a stable, unique id
#[test]
#[allow(clippy::unwrap_used)]
fn given_nested_entries_when_building_then_ids_increase_in_pre_order() {
    // Given: Entries with two levels of submenus
    let entries = sample_entries();

    // When: Building the tree
    let built = MenuTreeBuilder::build(entries).unwrap();

    // Then: Seven nodes (six caller nodes plus Quit) numbered consecutively
    let ids = built.tree.ids_pre_order();
    let expected: Vec<ActionId> = (0..7).map(|n| ActionId::new(ActionId::FIRST.get() + n)).collect();
    assert_eq!(ids, expected);
    assert_eq!(built.tree.len(), 7);
}

/// WHAT: Quit is appended last and holds the highest id
/// WHY: The reserved entry must always exist and always sort last
#[test]
#[allow(clippy::unwrap_used)]
fn given_entries_when_building_then_quit_is_last_with_max_id() {
    // Given: The sample entries
    let entries = sample_entries();

    // When: Building the tree
    let built = MenuTreeBuilder::build(entries).unwrap();

    // Then: The last top-level node is Quit with the maximum id
    let last = built.tree.nodes().last().unwrap();
    assert_eq!(last.label(), QUIT_LABEL);
    assert!(matches!(last, MenuNode::Leaf { .. }));

    let max = built.tree.ids_pre_order().into_iter().max().unwrap();
    assert_eq!(built.tree.quit_id(), Some(max));
    assert_eq!(built.registry.quit_id(), Some(max));
    assert!(matches!(
        built.registry.get(max),
        Some(RegisteredAction::Quit)
    ));
}

/// WHAT: Only leaves are registered
/// WHY: Submenus are never directly invocable
#[test]
#[allow(clippy::unwrap_used)]
fn given_entries_with_submenus_when_building_then_registry_holds_leaves_only() {
    // Given: The sample entries (four leaves, two submenus, plus Quit)
    let entries = sample_entries();

    // When: Building the tree
    let built = MenuTreeBuilder::build(entries).unwrap();

    // Then: Five registry entries, all leaf ids; submenu ids are absent
    assert_eq!(built.registry.len(), 5);
    let leaf_ids: Vec<ActionId> = built.registry.ids().collect();
    assert_eq!(leaf_ids.len(), 5);
    assert!(leaf_ids.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(leaf_ids.last().copied(), built.tree.quit_id());

    let submenu_ids: Vec<ActionId> = built
        .tree
        .nodes()
        .iter()
        .filter(|node| matches!(node, MenuNode::SubMenu { .. }))
        .map(MenuNode::id)
        .collect();
    assert_eq!(submenu_ids.len(), 1);
    for id in submenu_ids {
        assert!(!built.registry.contains(id));
    }
}

/// WHAT: No entries still yields a Quit entry
/// WHY: The tray must always offer a way out
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_entries_when_building_then_only_quit_exists() {
    // Given: No caller entries
    let entries: Vec<Entry> = Vec::new();

    // When: Building the tree
    let built = MenuTreeBuilder::build(entries).unwrap();

    // Then: Quit gets the first id
    assert_eq!(built.tree.len(), 1);
    assert_eq!(built.tree.quit_id(), Some(ActionId::FIRST));
    assert_eq!(built.registry.len(), 1);
}

/// WHAT: A blank label fails the whole build
/// WHY: Partially built menus would leave ids without display text
#[test]
fn given_blank_label_when_building_then_malformed_menu_spec() {
    // Given: A submenu containing a blank-labelled leaf
    let entries = vec![noop("Fine"), MenuEntry::submenu("Tools", vec![noop("   ")])];

    // When: Building the tree
    let result = MenuTreeBuilder::build(entries);

    // Then: The error names the path to the offending entry
    match result {
        Err(CoreError::MalformedMenuSpec { path, .. }) => {
            assert_eq!(path, "Tools > (unnamed)");
        }
        other => unreachable!("expected MalformedMenuSpec, got {other:?}"),
    }
}

/// WHAT: An empty submenu fails the build
/// WHY: Native menus cannot display a submenu without entries
#[test]
fn given_empty_submenu_when_building_then_malformed_menu_spec() {
    // Given: A nested empty submenu
    let entries: Vec<Entry> = vec![MenuEntry::submenu(
        "Outer",
        vec![MenuEntry::submenu("Inner", Vec::new())],
    )];

    // When: Building the tree
    let result = MenuTreeBuilder::build(entries);

    // Then: Rejected as malformed and flagged fatal
    match result {
        Err(e @ CoreError::MalformedMenuSpec { .. }) => {
            assert!(e.is_fatal());
            assert!(e.to_string().contains("Outer > Inner"));
        }
        other => unreachable!("expected MalformedMenuSpec, got {other:?}"),
    }
}

/// WHAT: ActionId survives the string form used by native menus
/// WHY: Menu events carry ids back as text
#[test]
#[allow(clippy::unwrap_used)]
fn given_action_id_when_formatted_and_parsed_then_same_id() {
    // Given: The first assignable id
    let id = ActionId::FIRST;

    // When: Formatting and parsing it back
    let parsed: ActionId = id.to_string().parse().unwrap();

    // Then: Same id; garbage does not parse
    assert_eq!(parsed, id);
    assert_eq!(id.to_string(), "1024");
    assert!("quit".parse::<ActionId>().is_err());
}
