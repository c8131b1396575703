//! Item lifecycle: adding, selecting, locking, removing and pasting.

use draftkit_core::Vec2;
use tracing::warn;

use crate::editor::EditorState;
use crate::model::{appearance, Diagram, DiagramItemSet};
use crate::renderer::RendererRegistry;
use crate::serializer::Serializer;

use super::EditorAction;

/// Images larger than this edge length are scaled down, keeping ratio.
const MAX_IMAGE_SIZE: f64 = 300.0;

pub(crate) fn reduce(
    state: &EditorState,
    action: &EditorAction,
    registry: &RendererRegistry,
    serializer: &Serializer,
) -> Option<EditorState> {
    match action {
        EditorAction::SelectItems {
            diagram_id,
            item_ids,
        } => Some(state.update_diagram(diagram_id, |diagram| diagram.select_items(item_ids))),

        EditorAction::RemoveItems {
            diagram_id,
            item_ids,
        } => Some(state.update_diagram(diagram_id, |diagram| {
            match DiagramItemSet::from_diagram(diagram, item_ids) {
                Some(set) => diagram.remove_items(&set),
                None => diagram.clone(),
            }
        })),

        EditorAction::LockItems {
            diagram_id,
            item_ids,
        } => Some(state.update_diagram(diagram_id, |diagram| {
            diagram.update_items(item_ids, |item| item.set_locked(true))
        })),

        EditorAction::UnlockItems {
            diagram_id,
            item_ids,
        } => Some(state.update_diagram(diagram_id, |diagram| {
            diagram.update_items(item_ids, |item| item.set_locked(false))
        })),

        EditorAction::PasteItems {
            diagram_id,
            json,
            x,
            y,
        } => Some(paste_items(state, serializer, diagram_id, json, *x, *y)),

        EditorAction::AddVisual {
            diagram_id,
            shape_id,
            renderer,
            position,
            appearance,
        } => Some(state.update_diagram(diagram_id, |diagram| {
            let shape = match registry.create_default_shape(renderer, shape_id) {
                Some(shape) => shape,
                None => {
                    warn!(%renderer, "dropping AddVisual for an unknown renderer");
                    return diagram.clone();
                }
            };

            let center = *position + shape.transform().size() * 0.5;
            let mut shape = shape.transform_with(|t| t.move_to(center));

            if let Some(entries) = appearance {
                for (key, value) in entries {
                    shape = shape.set_appearance(key, value.clone());
                }
            }

            let id = shape.id().to_string();
            diagram.add_shape(shape).select_items(&[id])
        })),

        EditorAction::AddIcon {
            diagram_id,
            shape_id,
            text,
            font_family,
            position,
        } => Some(state.update_diagram(diagram_id, |diagram| {
            let shape = match registry.create_default_shape("Icon", shape_id) {
                Some(shape) => shape,
                None => return diagram.clone(),
            };

            let center = *position + shape.transform().size() * 0.5;
            let shape = shape
                .transform_with(|t| t.move_to(center))
                .set_appearance(appearance::TEXT, text.clone())
                .set_appearance(appearance::ICON_FONT_FAMILY, font_family.clone());

            let id = shape.id().to_string();
            diagram.add_shape(shape).select_items(&[id])
        })),

        EditorAction::AddImage {
            diagram_id,
            shape_id,
            source,
            position,
            size,
        } => Some(state.update_diagram(diagram_id, |diagram| {
            let shape = match registry.create_default_shape("Raster", shape_id) {
                Some(shape) => shape,
                None => return diagram.clone(),
            };

            let size = clamp_image_size(*size);
            let center = *position + size * 0.5;

            let shape = shape
                .transform_with(|t| t.resize_to(size))
                .transform_with(|t| t.move_to(center))
                .set_appearance(appearance::SOURCE, source.clone());

            let id = shape.id().to_string();
            diagram.add_shape(shape).select_items(&[id])
        })),

        _ => None,
    }
}

/// Deserializes the payload, adds it and shifts the visuals so the first
/// one's center lands at (x, y). A zero coordinate means no offset on
/// that axis, which keeps plain in-place pastes where they were.
fn paste_items(
    state: &EditorState,
    serializer: &Serializer,
    diagram_id: &str,
    json: &str,
    x: f64,
    y: f64,
) -> EditorState {
    let set = match serializer.deserialize_set(json) {
        Ok(set) => set,
        Err(err) => {
            warn!(%err, "dropping an unreadable paste payload");
            return state.clone();
        }
    };

    state.update_diagram(diagram_id, |diagram| {
        if !set.can_add_to(diagram) {
            return diagram.clone();
        }

        let mut diagram = diagram.add_items(&set);

        let origin = match set.shapes().first() {
            Some(origin) => origin,
            None => return diagram,
        };
        let origin_center = origin.transform().position();

        let offset = Vec2::new(
            if x == 0.0 { 0.0 } else { x - origin_center.x },
            if y == 0.0 { 0.0 } else { y - origin_center.y },
        );

        for shape in set.shapes() {
            let old_bounds = match diagram.items().get(shape.id()) {
                Some(item) => item.bounds(&diagram),
                None => continue,
            };
            let new_bounds = old_bounds.move_by(offset);

            diagram = diagram
                .update_item(shape.id(), |item| item.transform_by_bounds(&old_bounds, &new_bounds));
        }

        diagram.select_items(set.root_ids())
    })
}

fn clamp_image_size(size: Vec2) -> Vec2 {
    if size.x <= MAX_IMAGE_SIZE && size.y <= MAX_IMAGE_SIZE {
        return size;
    }

    let ratio = size.x / size.y;
    if ratio > 1.0 {
        Vec2::new(MAX_IMAGE_SIZE, MAX_IMAGE_SIZE / ratio)
    } else {
        Vec2::new(MAX_IMAGE_SIZE * ratio, MAX_IMAGE_SIZE)
    }
}
