//! Z-order changes within one parent container.

use crate::editor::EditorState;

use super::{EditorAction, OrderMode};

pub(crate) fn reduce(state: &EditorState, action: &EditorAction) -> Option<EditorState> {
    match action {
        EditorAction::OrderItems {
            diagram_id,
            item_ids,
            mode,
        } => Some(state.update_diagram(diagram_id, |diagram| match mode {
            OrderMode::BringToFront => diagram.bring_to_front(item_ids),
            OrderMode::BringForwards => diagram.bring_forwards(item_ids),
            OrderMode::SendBackwards => diagram.send_backwards(item_ids),
            OrderMode::SendToBack => diagram.send_to_back(item_ids),
        })),

        _ => None,
    }
}
