//! Diagram lifecycle: pages being added, picked, removed and reordered.

use crate::editor::EditorState;
use crate::model::Diagram;

use super::EditorAction;

pub(crate) fn reduce(state: &EditorState, action: &EditorAction) -> Option<EditorState> {
    match action {
        EditorAction::AddDiagram { diagram_id } => Some(
            state
                .add_diagram(Diagram::empty(diagram_id.clone()))
                .select_diagram(diagram_id),
        ),
        EditorAction::SelectDiagram { diagram_id } => Some(state.select_diagram(diagram_id)),
        EditorAction::RemoveDiagram { diagram_id } => Some(state.remove_diagram(diagram_id)),
        EditorAction::MoveDiagram { diagram_id, index } => {
            Some(state.move_diagram(diagram_id, *index))
        }
        _ => None,
    }
}
