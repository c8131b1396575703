//! Editing actions and the reducer that applies them.
//!
//! Every edit is a value. The reducer is a pure function from state and
//! action to the next state, so the whole editing history of a document
//! is just the list of actions that built it, and that list is what gets
//! persisted. Actions serialize with a `type` tag in the classic redux
//! shape.
//!
//! Reducers are total: unknown diagram ids, unknown item ids and
//! structurally impossible requests all return the state unchanged, with
//! its allocations shared, so callers can detect "nothing happened" by
//! identity.

mod alignment;
mod appearance;
mod diagrams;
mod grouping;
mod items;
mod ordering;

use draftkit_core::{new_id, Transform, Vec2};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::editor::EditorState;
use crate::renderer::RendererRegistry;
use crate::serializer::Serializer;

/// Where to move items within their z-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderMode {
    BringToFront,
    BringForwards,
    SendBackwards,
    SendToBack,
}

/// Which edge or axis to align to, or which axis to distribute along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlignMode {
    Left,
    CenterX,
    Right,
    Top,
    CenterY,
    Bottom,
    DistributeHorizontal,
    DistributeVertical,
}

/// One edit, as a serializable value.
///
/// `Undo` and `Redo` are markers for the store; they never reach the
/// reducer and never appear in a recorded action log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum EditorAction {
    AddDiagram {
        diagram_id: String,
    },
    SelectDiagram {
        diagram_id: String,
    },
    RemoveDiagram {
        diagram_id: String,
    },
    MoveDiagram {
        diagram_id: String,
        index: usize,
    },

    AddVisual {
        diagram_id: String,
        shape_id: String,
        renderer: String,
        position: Vec2,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        appearance: Option<IndexMap<String, Value>>,
    },
    AddImage {
        diagram_id: String,
        shape_id: String,
        source: String,
        position: Vec2,
        size: Vec2,
    },
    AddIcon {
        diagram_id: String,
        shape_id: String,
        text: String,
        font_family: String,
        position: Vec2,
    },

    SelectItems {
        diagram_id: String,
        item_ids: Vec<String>,
    },
    RemoveItems {
        diagram_id: String,
        item_ids: Vec<String>,
    },
    LockItems {
        diagram_id: String,
        item_ids: Vec<String>,
    },
    UnlockItems {
        diagram_id: String,
        item_ids: Vec<String>,
    },
    PasteItems {
        diagram_id: String,
        json: String,
        x: f64,
        y: f64,
    },

    ChangeItemsAppearance {
        diagram_id: String,
        item_ids: Vec<String>,
        key: String,
        value: Value,
        force: bool,
    },
    TransformItems {
        diagram_id: String,
        item_ids: Vec<String>,
        old_bounds: Transform,
        new_bounds: Transform,
    },

    GroupItems {
        diagram_id: String,
        group_id: String,
        item_ids: Vec<String>,
    },
    UngroupItems {
        diagram_id: String,
        group_ids: Vec<String>,
    },
    OrderItems {
        diagram_id: String,
        item_ids: Vec<String>,
        mode: OrderMode,
    },
    AlignItems {
        diagram_id: String,
        item_ids: Vec<String>,
        mode: AlignMode,
    },

    Undo,
    Redo,
}

impl EditorAction {
    /// A new, empty diagram with a fresh id.
    pub fn add_diagram() -> Self {
        Self::AddDiagram {
            diagram_id: new_id(),
        }
    }

    /// A default shape of the given renderer with its top left at (x, y).
    pub fn add_visual(diagram_id: &str, renderer: &str, x: f64, y: f64) -> Self {
        Self::AddVisual {
            diagram_id: diagram_id.to_string(),
            shape_id: new_id(),
            renderer: renderer.to_string(),
            position: Vec2::new(x, y),
            appearance: None,
        }
    }

    /// Like [`EditorAction::add_visual`], with appearance overrides
    /// applied on top of the renderer defaults.
    pub fn add_visual_with(
        diagram_id: &str,
        renderer: &str,
        x: f64,
        y: f64,
        appearance: IndexMap<String, Value>,
    ) -> Self {
        Self::AddVisual {
            diagram_id: diagram_id.to_string(),
            shape_id: new_id(),
            renderer: renderer.to_string(),
            position: Vec2::new(x, y),
            appearance: Some(appearance),
        }
    }

    /// An image shape for the given source url, scaled down to fit the
    /// maximum edge length.
    pub fn add_image(diagram_id: &str, source: &str, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::AddImage {
            diagram_id: diagram_id.to_string(),
            shape_id: new_id(),
            source: source.to_string(),
            position: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// An icon shape showing `text` in the given icon font.
    pub fn add_icon(diagram_id: &str, text: &str, font_family: &str, x: f64, y: f64) -> Self {
        Self::AddIcon {
            diagram_id: diagram_id.to_string(),
            shape_id: new_id(),
            text: text.to_string(),
            font_family: font_family.to_string(),
            position: Vec2::new(x, y),
        }
    }

    /// Groups the given items under a fresh group id.
    pub fn group_items(diagram_id: &str, item_ids: Vec<String>) -> Self {
        Self::GroupItems {
            diagram_id: diagram_id.to_string(),
            group_id: new_id(),
            item_ids,
        }
    }
}

/// Applies one action to the editor state.
///
/// The registry resolves renderer names for the add actions, the
/// serializer reads paste payloads. Actions no reducer claims, including
/// the `Undo`/`Redo` markers, leave the state untouched.
pub fn reduce(
    state: &EditorState,
    action: &EditorAction,
    registry: &RendererRegistry,
    serializer: &Serializer,
) -> EditorState {
    diagrams::reduce(state, action)
        .or_else(|| items::reduce(state, action, registry, serializer))
        .or_else(|| appearance::reduce(state, action, registry))
        .or_else(|| grouping::reduce(state, action))
        .or_else(|| ordering::reduce(state, action))
        .or_else(|| alignment::reduce(state, action))
        .unwrap_or_else(|| state.clone())
}
