//! The mutable shell around the pure reducer.

use std::sync::Arc;

use crate::actions::{reduce, EditorAction};
use crate::editor::EditorState;
use crate::history::UndoableState;
use crate::renderer::RendererRegistry;
use crate::serializer::Serializer;

/// Owns the editor state, its undo history and the collaborators the
/// reducer needs. All edits go through [`dispatch`](Self::dispatch).
pub struct EditorStore {
    registry: Arc<RendererRegistry>,
    serializer: Serializer,
    history: UndoableState<EditorState, EditorAction>,
}

impl EditorStore {
    /// A store over the built-in shape library, opened on one fresh
    /// diagram. The seed diagram is created through a regular action,
    /// so the recorded log rebuilds the document from empty on its own.
    pub fn new() -> Self {
        Self::with_registry(Arc::new(RendererRegistry::default()))
    }

    pub fn with_registry(registry: Arc<RendererRegistry>) -> Self {
        let serializer = Serializer::new(Arc::clone(&registry));

        let seed = EditorAction::add_diagram();
        let state = reduce(&EditorState::empty(), &seed, &registry, &serializer);

        Self {
            registry,
            serializer,
            history: UndoableState::seeded(state, seed),
        }
    }

    pub fn present(&self) -> &EditorState {
        self.history.present()
    }

    pub fn selected_diagram_id(&self) -> Option<String> {
        self.present().selected_diagram_id().map(str::to_string)
    }

    pub fn registry(&self) -> &Arc<RendererRegistry> {
        &self.registry
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The action log leading to the present, oldest first.
    pub fn actions(&self) -> Vec<EditorAction> {
        self.history.actions()
    }

    /// Applies one action. Results identical to the present leave the
    /// history alone; transient actions swap the present in place.
    pub fn dispatch(&mut self, action: EditorAction) {
        match action {
            EditorAction::Undo => self.history.undo(),
            EditorAction::Redo => self.history.redo(),
            action => {
                let next = reduce(self.present(), &action, &self.registry, &self.serializer);
                if next.ptr_eq(self.present()) {
                    return;
                }

                if is_transient(&action) {
                    self.history.replace_present(next);
                } else {
                    self.history.executed(next, action);
                }
            }
        }
    }

    /// Folds a recorded log over an empty state.
    pub fn replay(&self, actions: &[EditorAction]) -> EditorState {
        actions.iter().fold(EditorState::empty(), |state, action| {
            reduce(&state, action, &self.registry, &self.serializer)
        })
    }
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Selection moves with every click and marquee drag; recording each one
/// would bury the real edits in the history.
fn is_transient(action: &EditorAction) -> bool {
    matches!(
        action,
        EditorAction::SelectItems { .. } | EditorAction::SelectDiagram { .. }
    )
}
