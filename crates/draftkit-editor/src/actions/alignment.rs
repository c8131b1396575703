//! Alignment and distribution of items against their shared bounds.

use draftkit_core::{Rect2, Transform, Vec2};

use crate::editor::EditorState;
use crate::model::Diagram;

use super::{AlignMode, EditorAction};

pub(crate) fn reduce(state: &EditorState, action: &EditorAction) -> Option<EditorState> {
    match action {
        EditorAction::AlignItems {
            diagram_id,
            item_ids,
            mode,
        } => Some(state.update_diagram(diagram_id, |diagram| {
            align(diagram, item_ids, *mode)
        })),

        _ => None,
    }
}

fn align(diagram: &Diagram, item_ids: &[String], mode: AlignMode) -> Diagram {
    let mut participants: Vec<(String, Transform)> = Vec::with_capacity(item_ids.len());
    for id in item_ids {
        match diagram.items().get(id) {
            Some(item) => participants.push((id.clone(), item.bounds(diagram))),
            None => return diagram.clone(),
        }
    }

    // One item aligned against itself goes nowhere.
    if participants.len() < 2 {
        return diagram.clone();
    }

    let aabbs: Vec<Rect2> = participants
        .iter()
        .map(|(_, bounds)| bounds.aabb())
        .collect();
    let union = Rect2::from_rects(aabbs.iter().copied());

    let deltas = match mode {
        AlignMode::DistributeHorizontal => distribute_deltas(&aabbs, &union, true),
        AlignMode::DistributeVertical => distribute_deltas(&aabbs, &union, false),
        _ => aabbs
            .iter()
            .map(|aabb| align_delta(mode, &union, aabb))
            .collect(),
    };

    let mut next = diagram.clone();
    for ((id, old_bounds), delta) in participants.iter().zip(deltas) {
        if delta == Vec2::ZERO {
            continue;
        }

        let new_bounds = old_bounds.move_by(delta);
        next = next.update_items(std::slice::from_ref(id), |item| {
            item.transform_by_bounds(old_bounds, &new_bounds)
        });
    }

    next
}

fn align_delta(mode: AlignMode, union: &Rect2, aabb: &Rect2) -> Vec2 {
    match mode {
        AlignMode::Left => Vec2::new(union.left() - aabb.left(), 0.0),
        AlignMode::CenterX => Vec2::new(union.center_x() - aabb.center_x(), 0.0),
        AlignMode::Right => Vec2::new(union.right() - aabb.right(), 0.0),
        AlignMode::Top => Vec2::new(0.0, union.top() - aabb.top()),
        AlignMode::CenterY => Vec2::new(0.0, union.center_y() - aabb.center_y()),
        AlignMode::Bottom => Vec2::new(0.0, union.bottom() - aabb.bottom()),
        AlignMode::DistributeHorizontal | AlignMode::DistributeVertical => Vec2::ZERO,
    }
}

/// Lays the items out along one axis with even gaps, the outermost edges
/// pinned to the union bounds. Items keep their relative order on that axis.
fn distribute_deltas(aabbs: &[Rect2], union: &Rect2, horizontal: bool) -> Vec<Vec2> {
    let extent = |aabb: &Rect2| if horizontal { aabb.width() } else { aabb.height() };
    let start = |aabb: &Rect2| if horizontal { aabb.left() } else { aabb.top() };

    let mut order: Vec<usize> = (0..aabbs.len()).collect();
    order.sort_by(|&a, &b| start(&aabbs[a]).total_cmp(&start(&aabbs[b])));

    let occupied: f64 = aabbs.iter().map(extent).sum();
    let span = if horizontal { union.width() } else { union.height() };
    let gap = (span - occupied) / (aabbs.len() - 1) as f64;

    let mut deltas = vec![Vec2::ZERO; aabbs.len()];
    let mut position = if horizontal { union.left() } else { union.top() };

    for index in order {
        let aabb = &aabbs[index];
        let shift = position - start(aabb);

        deltas[index] = if horizontal {
            Vec2::new(shift, 0.0)
        } else {
            Vec2::new(0.0, shift)
        };

        position += extent(aabb) + gap;
    }

    deltas
}
