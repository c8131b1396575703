//! Appearance writes and bounds driven transforms on existing items.

use serde_json::Value;

use crate::editor::EditorState;
use crate::model::{Diagram, DiagramItem, DiagramItemSet};
use crate::renderer::RendererRegistry;

use super::EditorAction;

pub(crate) fn reduce(
    state: &EditorState,
    action: &EditorAction,
    registry: &RendererRegistry,
) -> Option<EditorState> {
    match action {
        EditorAction::ChangeItemsAppearance {
            diagram_id,
            item_ids,
            key,
            value,
            force,
        } => Some(state.update_diagram(diagram_id, |diagram| {
            change_appearance(diagram, registry, item_ids, key, value, *force)
        })),

        EditorAction::TransformItems {
            diagram_id,
            item_ids,
            old_bounds,
            new_bounds,
        } => Some(state.update_diagram(diagram_id, |diagram| {
            diagram.update_items(item_ids, |item| {
                item.transform_by_bounds(old_bounds, new_bounds)
            })
        })),

        _ => None,
    }
}

/// Writes one appearance key on every visual in the closure of the given
/// items. Unless forced, only renderers that know the key take it.
fn change_appearance(
    diagram: &Diagram,
    registry: &RendererRegistry,
    item_ids: &[String],
    key: &str,
    value: &Value,
    force: bool,
) -> Diagram {
    let set = match DiagramItemSet::from_diagram(diagram, item_ids) {
        Some(set) => set,
        None => return diagram.clone(),
    };

    let mut diagram = diagram.clone();

    for shape in set.shapes() {
        let supported = force
            || registry
                .get(shape.renderer())
                .map_or(false, |renderer| renderer.supports_appearance(key));
        if !supported {
            continue;
        }

        diagram = diagram.update_item(shape.id(), |item| match item {
            DiagramItem::Shape(shape) => {
                DiagramItem::Shape(shape.set_appearance(key, value.clone()))
            }
            DiagramItem::Group(_) => item.clone(),
        });
    }

    diagram
}
