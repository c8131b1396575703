//! The document root: all diagrams plus which one is being edited.

use draftkit_core::{ImmutableIdMap, Vec2};

use crate::model::Diagram;

/// The full editor document.
///
/// Like everything below it, this is a persistent value: operations hand
/// back a new state, or the same one (same allocations) when nothing
/// changed.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    diagrams: ImmutableIdMap<Diagram>,
    selected_diagram_id: Option<String>,
    size: Vec2,
}

impl EditorState {
    /// Canvas extent given to new documents.
    pub const DEFAULT_SIZE: Vec2 = Vec2::new(5000.0, 5000.0);

    pub fn empty() -> Self {
        Self {
            diagrams: ImmutableIdMap::empty(),
            selected_diagram_id: None,
            size: Self::DEFAULT_SIZE,
        }
    }

    pub fn diagrams(&self) -> &ImmutableIdMap<Diagram> {
        &self.diagrams
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn selected_diagram_id(&self) -> Option<&str> {
        self.selected_diagram_id.as_deref()
    }

    pub fn selected_diagram(&self) -> Option<&Diagram> {
        self.selected_diagram_id
            .as_deref()
            .and_then(|id| self.diagrams.get(id))
    }

    /// True when both states share all backing allocations.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.diagrams.ptr_eq(&other.diagrams)
            && self.selected_diagram_id == other.selected_diagram_id
            && self.size == other.size
    }

    /// Adds a diagram. A colliding id is a no-op; selection is untouched.
    pub fn add_diagram(&self, diagram: Diagram) -> Self {
        let diagrams = self.diagrams.add(diagram);
        if diagrams.ptr_eq(&self.diagrams) {
            return self.clone();
        }

        Self {
            diagrams,
            ..self.clone()
        }
    }

    /// Removes a diagram and drops the selection if it pointed there.
    pub fn remove_diagram(&self, id: &str) -> Self {
        let diagrams = self.diagrams.remove(id);
        if diagrams.ptr_eq(&self.diagrams) {
            return self.clone();
        }

        let selected_diagram_id = match &self.selected_diagram_id {
            Some(selected) if selected == id => None,
            other => other.clone(),
        };

        Self {
            diagrams,
            selected_diagram_id,
            size: self.size,
        }
    }

    /// Selects a diagram. Unknown ids are a no-op.
    pub fn select_diagram(&self, id: &str) -> Self {
        if !self.diagrams.contains_key(id) {
            return self.clone();
        }
        if self.selected_diagram_id.as_deref() == Some(id) {
            return self.clone();
        }

        Self {
            selected_diagram_id: Some(id.to_string()),
            ..self.clone()
        }
    }

    /// Moves a diagram to another position in the page list.
    pub fn move_diagram(&self, id: &str, index: usize) -> Self {
        let diagrams = self.diagrams.move_to(&[id], index);
        if diagrams.ptr_eq(&self.diagrams) {
            return self.clone();
        }

        Self {
            diagrams,
            ..self.clone()
        }
    }

    /// Applies `f` to one diagram. Unknown ids, or an `f` that returns an
    /// equal diagram, leave the state untouched.
    pub fn update_diagram<F>(&self, id: &str, f: F) -> Self
    where
        F: FnOnce(&Diagram) -> Diagram,
    {
        let diagrams = self.diagrams.update(id, f);
        if diagrams.ptr_eq(&self.diagrams) {
            return self.clone();
        }

        Self {
            diagrams,
            ..self.clone()
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::empty()
    }
}
