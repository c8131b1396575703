use draftkit_core::Vec2;
use draftkit_editor::{DiagramItemSet, DiagramShape, EditorAction, EditorStore};

fn selected_single(store: &EditorStore) -> String {
    let diagram = store.present().selected_diagram().unwrap();
    let mut iter = diagram.selected_ids().iter();

    let id = iter.next().unwrap().to_string();
    assert!(iter.next().is_none(), "expected exactly one selected item");
    id
}

fn shape<'a>(store: &'a EditorStore, id: &str) -> &'a DiagramShape {
    store
        .present()
        .selected_diagram()
        .unwrap()
        .items()
        .get(id)
        .unwrap()
        .as_shape()
        .unwrap()
}

/// A store holding one group of a Button and a Label, plus the payload a
/// copy of that group puts on the clipboard.
fn copied_group() -> (EditorStore, String, String) {
    let mut store = EditorStore::new();
    let diagram_id = store.selected_diagram_id().unwrap();

    store.dispatch(EditorAction::add_visual(&diagram_id, "Button", 100.0, 100.0));
    let button_id = selected_single(&store);
    store.dispatch(EditorAction::add_visual(&diagram_id, "Label", 300.0, 100.0));
    let label_id = selected_single(&store);

    store.dispatch(EditorAction::group_items(
        &diagram_id,
        vec![button_id, label_id],
    ));
    let group_id = selected_single(&store);

    let payload = {
        let diagram = store.present().selected_diagram().unwrap();
        let set = DiagramItemSet::from_diagram(diagram, std::slice::from_ref(&group_id)).unwrap();
        store.serializer().serialize_set(&set, true)
    };

    (store, diagram_id, payload)
}

#[test]
fn test_paste_positions_the_clone_and_selects_it() {
    let (mut store, diagram_id, payload) = copied_group();

    let (original_count, button_center, label_center) = {
        let diagram = store.present().selected_diagram().unwrap();
        let group = diagram
            .items()
            .get(&selected_single(&store))
            .unwrap()
            .as_group()
            .unwrap()
            .clone();
        let children = group.children().as_slice().to_vec();

        (
            diagram.items().len(),
            shape(&store, &children[0]).transform().position(),
            shape(&store, &children[1]).transform().position(),
        )
    };
    assert_eq!(original_count, 3);

    store.dispatch(EditorAction::PasteItems {
        diagram_id,
        json: payload,
        x: 400.0,
        y: 300.0,
    });

    let pasted_group_id = selected_single(&store);
    let pasted_children = {
        let diagram = store.present().selected_diagram().unwrap();
        assert_eq!(diagram.items().len(), 6);

        diagram
            .items()
            .get(&pasted_group_id)
            .unwrap()
            .as_group()
            .unwrap()
            .children()
            .as_slice()
            .to_vec()
    };

    // The first copied visual lands centered on the paste point, the rest
    // keep their relative offsets.
    let pasted_button = shape(&store, &pasted_children[0]).transform().position();
    let pasted_label = shape(&store, &pasted_children[1]).transform().position();

    assert_eq!(pasted_button, Vec2::new(400.0, 300.0));
    assert_eq!(
        pasted_label,
        label_center + (Vec2::new(400.0, 300.0) - button_center)
    );
}

#[test]
fn test_pasting_the_same_payload_twice_is_rejected_whole() {
    let (mut store, diagram_id, payload) = copied_group();

    store.dispatch(EditorAction::PasteItems {
        diagram_id: diagram_id.clone(),
        json: payload.clone(),
        x: 400.0,
        y: 300.0,
    });
    assert_eq!(
        store.present().selected_diagram().unwrap().items().len(),
        6
    );

    let before = store.present().clone();
    let log_len = store.actions().len();

    // Same ids again: the whole paste degrades to a no-op and leaves no
    // trace in the history.
    store.dispatch(EditorAction::PasteItems {
        diagram_id,
        json: payload,
        x: 500.0,
        y: 300.0,
    });

    assert!(store.present().ptr_eq(&before));
    assert_eq!(store.actions().len(), log_len);
}

#[test]
fn test_reminting_makes_repeat_pastes_collision_free() {
    let (mut store, diagram_id, payload) = copied_group();

    store.dispatch(EditorAction::PasteItems {
        diagram_id: diagram_id.clone(),
        json: payload.clone(),
        x: 400.0,
        y: 300.0,
    });

    let reminted = {
        let set = store.serializer().deserialize_set(&payload).unwrap();
        store.serializer().serialize_set(&set, true)
    };
    store.dispatch(EditorAction::PasteItems {
        diagram_id,
        json: reminted,
        x: 450.0,
        y: 350.0,
    });

    assert_eq!(
        store.present().selected_diagram().unwrap().items().len(),
        9
    );
}
