use draftkit_editor::{calculate_selection, Diagram, EditorAction, EditorStore};

fn selected_single(store: &EditorStore) -> String {
    let diagram = store.present().selected_diagram().unwrap();
    let mut iter = diagram.selected_ids().iter();

    let id = iter.next().unwrap().to_string();
    assert!(iter.next().is_none(), "expected exactly one selected item");
    id
}

fn diagram(store: &EditorStore) -> &Diagram {
    store.present().selected_diagram().unwrap()
}

/// Two grouped buttons plus one loose, locked label.
fn scene() -> (EditorStore, String, Vec<String>, String, String) {
    let mut store = EditorStore::new();
    let diagram_id = store.selected_diagram_id().unwrap();

    let mut buttons = Vec::new();
    for x in [100.0, 250.0] {
        store.dispatch(EditorAction::add_visual(&diagram_id, "Button", x, 100.0));
        buttons.push(selected_single(&store));
    }

    store.dispatch(EditorAction::add_visual(&diagram_id, "Label", 100.0, 300.0));
    let label_id = selected_single(&store);
    store.dispatch(EditorAction::LockItems {
        diagram_id: diagram_id.clone(),
        item_ids: vec![label_id.clone()],
    });

    store.dispatch(EditorAction::group_items(&diagram_id, buttons.clone()));
    let group_id = selected_single(&store);

    (store, diagram_id, buttons, group_id, label_id)
}

#[test]
fn test_plain_clicks_select_the_outermost_group() {
    let (mut store, diagram_id, buttons, group_id, _) = scene();

    // Clear the selection the grouping left behind.
    store.dispatch(EditorAction::SelectItems {
        diagram_id,
        item_ids: Vec::new(),
    });

    let selection = calculate_selection(
        diagram(&store),
        std::slice::from_ref(&buttons[0]),
        true,
        false,
    );
    assert_eq!(selection, [group_id]);
}

#[test]
fn test_clicking_again_drills_into_the_group() {
    let (mut store, diagram_id, buttons, group_id, _) = scene();

    store.dispatch(EditorAction::SelectItems {
        diagram_id,
        item_ids: vec![group_id],
    });

    let selection = calculate_selection(
        diagram(&store),
        std::slice::from_ref(&buttons[0]),
        true,
        false,
    );
    assert_eq!(selection, [buttons[0].clone()]);
}

#[test]
fn test_locked_items_fall_out_of_marquee_selections() {
    let (store, _, buttons, group_id, label_id) = scene();

    let marquee = vec![buttons[0].clone(), label_id];
    let selection = calculate_selection(diagram(&store), &marquee, false, false);

    assert_eq!(selection, [group_id]);
}

#[test]
fn test_modifier_clicks_on_locked_items_change_nothing() {
    let (mut store, diagram_id, _, group_id, label_id) = scene();

    store.dispatch(EditorAction::SelectItems {
        diagram_id,
        item_ids: vec![group_id.clone()],
    });

    let selection = calculate_selection(
        diagram(&store),
        std::slice::from_ref(&label_id),
        true,
        true,
    );
    assert_eq!(selection, [group_id]);
}

#[test]
fn test_locked_items_still_take_a_direct_click() {
    let (store, _, _, _, label_id) = scene();

    let selection = calculate_selection(
        diagram(&store),
        std::slice::from_ref(&label_id),
        true,
        false,
    );
    assert_eq!(selection, [label_id]);
}
