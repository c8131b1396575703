//! # Draftkit Editor
//!
//! The document model of a wireframe/diagram editor: immutable diagrams,
//! pure editing actions with undo/redo, clipboard serialization, alignment
//! and gesture snapping. Rendering and UI live elsewhere; this crate owns
//! everything that must be correct, replayable and undoable.
//!
//! ## Core Components
//!
//! ### Document Model
//! - **DiagramItem**: shapes and groups as one tagged union
//! - **Diagram**: items, z-order and selection as a persistent aggregate
//! - **EditorState**: all diagrams plus the active one
//!
//! ### Editing
//! - **EditorAction**: every edit as a serializable value
//! - **reduce**: one pure `(state, action) -> state` function
//! - **UndoableState / EditorStore**: generic history over the reducer,
//!   with transient actions that never create undo frames
//!
//! ### Interop
//! - **Serializer**: clipboard JSON with id re-minting on copy
//! - **DraftFile**: versioned document files built from the action log
//! - **ShapeRenderer / RendererRegistry**: the seam a rendering frontend
//!   plugs into, with the built-in shape library behind it
//!
//! ### Interaction Support
//! - **calculate_selection**: click and marquee selection rules
//! - **SnapManager**: grid and sibling snapping for move/resize/rotate
//!
//! ## Architecture
//!
//! ```text
//! EditorStore (dispatch, history, action log)
//!   └── reduce (pure)
//!         └── EditorState
//!               └── Diagram ── DiagramItem (Shape | Group)
//!
//! Serializer ⇄ DiagramItemSet          (clipboard)
//! DraftFile  ⇄ action log              (documents)
//! SnapManager, calculate_selection     (gesture helpers, read only)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use draftkit_editor::{EditorAction, EditorStore};
//!
//! let mut store = EditorStore::new();
//! let diagram_id = store.selected_diagram_id().unwrap();
//!
//! store.dispatch(EditorAction::add_visual(&diagram_id, "Button", 100.0, 100.0));
//! store.dispatch(EditorAction::Undo);
//! ```

pub mod actions;
pub mod editor;
pub mod error;
pub mod history;
pub mod model;
pub mod persistence;
pub mod renderer;
pub mod selection;
pub mod serializer;
pub mod shapes;
pub mod snap;
pub mod store;

pub use actions::{AlignMode, EditorAction, OrderMode, reduce};
pub use editor::EditorState;
pub use error::{EditorError, SerializerError};
pub use history::UndoableState;
pub use model::{
    appearance, Configurable, Constraint, Diagram, DiagramContainer, DiagramGroup, DiagramItem,
    DiagramItemSet, DiagramShape,
};
pub use persistence::{Autosaver, DraftFile, FileMetadata};
pub use renderer::{RendererRegistry, ShapeRenderer};
pub use selection::calculate_selection;
pub use serializer::Serializer;
pub use snap::{SnapKind, SnapLine, SnapManager, SnapResult};
pub use store::EditorStore;
