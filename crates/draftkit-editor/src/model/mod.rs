//! The diagram document model.
//!
//! Everything in here is a persistent value. Mutating operations return a
//! new snapshot and hand back the old one (same allocations) when the
//! request changed nothing, so callers can compare snapshots by identity.

pub mod appearance;

mod configurables;
mod constraints;
mod container;
mod diagram;
mod item;
mod set;

pub use configurables::Configurable;
pub use constraints::{estimate_text_size, Constraint};
pub use container::DiagramContainer;
pub use diagram::Diagram;
pub use item::{DiagramGroup, DiagramItem, DiagramShape};
pub use set::DiagramItemSet;
