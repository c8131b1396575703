//! Grouping and ungrouping of items.

use tracing::warn;

use crate::editor::EditorState;
use crate::model::DiagramItem;

use super::EditorAction;

pub(crate) fn reduce(state: &EditorState, action: &EditorAction) -> Option<EditorState> {
    match action {
        EditorAction::GroupItems {
            diagram_id,
            group_id,
            item_ids,
        } => Some(state.update_diagram(diagram_id, |diagram| {
            diagram
                .group(group_id, item_ids)
                .select_items(&[group_id.clone()])
        })),

        EditorAction::UngroupItems {
            diagram_id,
            group_ids,
        } => Some(state.update_diagram(diagram_id, |diagram| {
            let mut next = diagram.clone();
            let mut freed: Vec<String> = Vec::new();

            // Looking the group up in the evolving diagram makes repeated
            // ids fall through to the unknown-id case.
            for group_id in group_ids {
                let children: Vec<String> = match next.items().get(group_id) {
                    Some(DiagramItem::Group(group)) => {
                        group.children().iter().cloned().collect()
                    }
                    _ => {
                        warn!(%group_id, "skipping an ungroup id with no matching group");
                        continue;
                    }
                };

                next = next.ungroup(group_id);
                freed.extend(children);
            }

            next.select_items(&freed)
        })),

        _ => None,
    }
}
