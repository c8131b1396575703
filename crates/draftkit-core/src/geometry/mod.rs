//! Geometry primitives: vectors, rotations, rectangles and transforms.
//!
//! All scalar math is `f64` in world units. Types are plain `Copy` values;
//! every operation returns a new value.

mod rect2;
mod rotation;
mod transform;
mod vec2;

pub use rect2::Rect2;
pub use rotation::Rotation;
pub use transform::Transform;
pub use vec2::Vec2;
