use std::sync::Arc;

use draftkit_core::{Rotation, Transform, Vec2};
use draftkit_editor::{
    reduce, Diagram, DiagramShape, EditorAction, EditorState, EditorStore, OrderMode,
    RendererRegistry, Serializer,
};

fn apply(state: &EditorState, action: EditorAction) -> EditorState {
    let registry = Arc::new(RendererRegistry::default());
    let serializer = Serializer::new(Arc::clone(&registry));

    reduce(state, &action, &registry, &serializer)
}

fn shape_at(id: &str, x: f64, y: f64, w: f64, h: f64) -> DiagramShape {
    DiagramShape::new(id, "Button", w, h).transform_with(|t| t.move_to(Vec2::new(x, y)))
}

fn state_with(diagram: Diagram) -> EditorState {
    let id = diagram.id().to_string();
    EditorState::empty().add_diagram(diagram).select_diagram(&id)
}

fn shape<'a>(state: &'a EditorState, id: &str) -> &'a DiagramShape {
    state
        .selected_diagram()
        .unwrap()
        .items()
        .get(id)
        .unwrap()
        .as_shape()
        .unwrap()
}

fn selected_single(store: &EditorStore) -> String {
    let diagram = store.present().selected_diagram().unwrap();
    let mut iter = diagram.selected_ids().iter();

    let id = iter.next().unwrap().to_string();
    assert!(iter.next().is_none(), "expected exactly one selected item");
    id
}

#[test]
fn test_bounds_transform_scales_sizes_and_centers() {
    let state = state_with(
        Diagram::empty("d1")
            .add_shape(shape_at("a", 100.0, 100.0, 50.0, 50.0))
            .add_shape(shape_at("b", 200.0, 200.0, 50.0, 50.0)),
    );

    let state = apply(
        &state,
        EditorAction::TransformItems {
            diagram_id: "d1".to_string(),
            item_ids: vec!["a".to_string(), "b".to_string()],
            old_bounds: Transform::new(
                Vec2::new(150.0, 150.0),
                Vec2::new(150.0, 150.0),
                Rotation::ZERO,
            ),
            new_bounds: Transform::new(
                Vec2::new(150.0, 150.0),
                Vec2::new(300.0, 300.0),
                Rotation::ZERO,
            ),
        },
    );

    let a = shape(&state, "a").transform();
    assert_eq!(a.position(), Vec2::new(50.0, 50.0));
    assert_eq!(a.size(), Vec2::new(100.0, 100.0));

    let b = shape(&state, "b").transform();
    assert_eq!(b.position(), Vec2::new(250.0, 250.0));
    assert_eq!(b.size(), Vec2::new(100.0, 100.0));
}

#[test]
fn test_constraints_get_the_final_word_after_resizes() {
    let mut store = EditorStore::new();
    let diagram_id = store.selected_diagram_id().unwrap();

    store.dispatch(EditorAction::add_visual(&diagram_id, "Checkbox", 100.0, 100.0));
    let checkbox_id = selected_single(&store);

    let old_bounds = shape(store.present(), &checkbox_id).transform();
    assert_eq!(old_bounds.size(), Vec2::new(104.0, 36.0));

    store.dispatch(EditorAction::TransformItems {
        diagram_id,
        item_ids: vec![checkbox_id.clone()],
        old_bounds,
        new_bounds: old_bounds.resize_to(Vec2::new(200.0, 100.0)),
    });

    // The width follows the drag, the height snaps back to the text row.
    let resized = shape(store.present(), &checkbox_id).transform();
    assert_eq!(resized.size(), Vec2::new(200.0, 36.0));
    assert_eq!(resized.position(), Vec2::new(152.0, 86.0));
}

#[test]
fn test_group_then_ungroup_restores_the_root_order() {
    let mut store = EditorStore::new();
    let diagram_id = store.selected_diagram_id().unwrap();

    let mut ids = Vec::new();
    for x in [100.0, 200.0, 300.0, 400.0] {
        store.dispatch(EditorAction::add_visual(&diagram_id, "Button", x, 100.0));
        ids.push(selected_single(&store));
    }

    store.dispatch(EditorAction::group_items(&diagram_id, ids[..2].to_vec()));
    let group_id = selected_single(&store);

    {
        let diagram = store.present().selected_diagram().unwrap();
        assert_eq!(diagram.root_ids().len(), 3);
        assert_eq!(diagram.root_ids().as_slice()[0], group_id);
    }

    store.dispatch(EditorAction::UngroupItems {
        diagram_id,
        group_ids: vec![group_id],
    });

    let diagram = store.present().selected_diagram().unwrap();
    assert_eq!(diagram.root_ids().as_slice(), ids.as_slice());

    let mut selected: Vec<_> = diagram.selected_ids().iter().collect();
    selected.sort_unstable();
    let mut freed: Vec<_> = ids[..2].iter().map(String::as_str).collect();
    freed.sort_unstable();
    assert_eq!(selected, freed);
}

#[test]
fn test_undo_stops_at_the_floor_and_redo_at_the_top() {
    let mut store = EditorStore::new();
    let diagram_id = store.selected_diagram_id().unwrap();
    let floor = store.present().clone();

    store.dispatch(EditorAction::add_visual(&diagram_id, "Button", 100.0, 100.0));
    store.dispatch(EditorAction::add_visual(&diagram_id, "Label", 200.0, 100.0));
    store.dispatch(EditorAction::add_visual(&diagram_id, "Slider", 300.0, 100.0));
    let top = store.present().clone();

    for _ in 0..5 {
        store.dispatch(EditorAction::Undo);
    }
    assert!(store.present().ptr_eq(&floor));
    assert!(!store.can_undo());

    for _ in 0..5 {
        store.dispatch(EditorAction::Redo);
    }
    assert!(store.present().ptr_eq(&top));
    assert!(!store.can_redo());
}

#[test]
fn test_boundary_reorders_never_enter_the_history() {
    let mut store = EditorStore::new();
    let diagram_id = store.selected_diagram_id().unwrap();

    store.dispatch(EditorAction::add_visual(&diagram_id, "Button", 100.0, 100.0));
    store.dispatch(EditorAction::add_visual(&diagram_id, "Button", 200.0, 100.0));
    let front_id = selected_single(&store);

    let before = store.present().clone();
    let log_len = store.actions().len();

    store.dispatch(EditorAction::OrderItems {
        diagram_id,
        item_ids: vec![front_id],
        mode: OrderMode::BringToFront,
    });

    assert!(store.present().ptr_eq(&before));
    assert_eq!(store.actions().len(), log_len);
}
