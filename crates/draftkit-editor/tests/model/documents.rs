use draftkit_editor::{appearance, AlignMode, DraftFile, EditorAction, EditorStore, OrderMode};
use serde_json::Value;

fn selected_single(store: &EditorStore) -> String {
    let diagram = store.present().selected_diagram().unwrap();
    let mut iter = diagram.selected_ids().iter();

    let id = iter.next().unwrap().to_string();
    assert!(iter.next().is_none(), "expected exactly one selected item");
    id
}

/// A session touching every family of recorded actions, including an
/// undone edit that must not reappear in the saved file.
fn editing_session() -> EditorStore {
    let mut store = EditorStore::new();
    let diagram_id = store.selected_diagram_id().unwrap();

    store.dispatch(EditorAction::add_visual(&diagram_id, "Button", 100.0, 100.0));
    let button_id = selected_single(&store);
    store.dispatch(EditorAction::add_visual(&diagram_id, "Label", 300.0, 100.0));
    let label_id = selected_single(&store);
    store.dispatch(EditorAction::add_visual(&diagram_id, "Slider", 100.0, 300.0));
    let slider_id = selected_single(&store);

    store.dispatch(EditorAction::ChangeItemsAppearance {
        diagram_id: diagram_id.clone(),
        item_ids: vec![button_id.clone()],
        key: appearance::TEXT.to_string(),
        value: Value::from("Submit"),
        force: false,
    });

    store.dispatch(EditorAction::group_items(
        &diagram_id,
        vec![button_id, label_id],
    ));

    store.dispatch(EditorAction::OrderItems {
        diagram_id: diagram_id.clone(),
        item_ids: vec![slider_id.clone()],
        mode: OrderMode::SendToBack,
    });

    store.dispatch(EditorAction::AlignItems {
        diagram_id: diagram_id.clone(),
        item_ids: vec![selected_single(&store), slider_id],
        mode: AlignMode::Right,
    });
    store.dispatch(EditorAction::Undo);

    store.dispatch(EditorAction::add_icon(&diagram_id, "\u{f0f3}", "FontAwesome", 500.0, 50.0));

    store
}

#[test]
fn test_save_load_replay_reproduces_the_document() {
    let store = editing_session();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.draft");

    let file = DraftFile::from_store("session", &store);
    file.save_to_file(&path).unwrap();

    let loaded = DraftFile::load_from_file(&path).unwrap();
    assert_eq!(loaded.actions, store.actions());
    assert!(loaded.metadata.modified >= file.metadata.modified);

    let replayed = loaded.replay(store.registry());
    assert_eq!(replayed, *store.present());
}

#[test]
fn test_undone_edits_never_reach_the_file() {
    let store = editing_session();

    let file = DraftFile::from_store("session", &store);

    assert!(!file
        .actions
        .iter()
        .any(|action| matches!(action, EditorAction::AlignItems { .. })));
    assert!(!file
        .actions
        .iter()
        .any(|action| matches!(action, EditorAction::Undo | EditorAction::Redo)));
}

#[test]
fn test_selection_changes_do_not_dirty_the_saved_document() {
    let mut store = EditorStore::new();
    let diagram_id = store.selected_diagram_id().unwrap();

    store.dispatch(EditorAction::add_visual(&diagram_id, "Button", 100.0, 100.0));
    let button_id = selected_single(&store);
    store.dispatch(EditorAction::add_visual(&diagram_id, "Label", 300.0, 100.0));

    store.dispatch(EditorAction::SelectItems {
        diagram_id: diagram_id.clone(),
        item_ids: vec![button_id],
    });
    assert_eq!(store.actions().len(), 3);

    // Selection is ephemeral: the replayed document has the same items
    // and order, whatever was highlighted when the file was written.
    let replayed = store.replay(&store.actions());
    let replayed_diagram = replayed.diagrams().get(&diagram_id).unwrap();
    let present_diagram = store.present().selected_diagram().unwrap();

    assert_eq!(replayed_diagram.items(), present_diagram.items());
    assert_eq!(
        replayed_diagram.root_ids().as_slice(),
        present_diagram.root_ids().as_slice()
    );
}
