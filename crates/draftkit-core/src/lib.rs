//! # Draftkit Core
//!
//! Geometry primitives and copy-on-write collections for the draftkit
//! document model. Everything in this crate is a value: operations return
//! new values and never mutate in place, so document snapshots can be kept
//! and compared cheaply.
//!
//! ## Geometry
//! - **Vec2**: 2D vector / point
//! - **Rotation**: angle normalized to `[0, 360)` degrees with cached trig
//! - **Rect2**: axis-aligned rectangle, including bounds of rotated boxes
//! - **Transform**: center + size + rotation box with the resize and
//!   re-parenting math used by selection gestures
//!
//! ## Collections
//! Persistent containers backed by [`std::sync::Arc`]. An operation that
//! changes nothing observable hands back a value sharing the same
//! allocation, and `ptr_eq` reports that sharing. Callers use this to
//! short-circuit: a reducer that gets the same allocation back knows the
//! action was a no-op.
//!
//! - **ImmutableList**: ordered values with z-order style reordering
//! - **ImmutableSet**: insertion-ordered id set
//! - **ImmutableIdMap**: insertion-ordered map keyed by each item's own id
//! - **ImmutableMap**: string-keyed map with deterministic order

pub mod collections;
pub mod geometry;
pub mod math;

pub use collections::{ImmutableIdMap, ImmutableList, ImmutableMap, ImmutableSet, WithId};
pub use geometry::{Rect2, Rotation, Transform, Vec2};
pub use math::{new_id, round_to_multiple_of, round_to_multiple_of_two, to_positive_degree};
