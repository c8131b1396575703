//! The built-in shape library.
//!
//! Each shape is a [`ShapeRenderer`](crate::renderer::ShapeRenderer)
//! implementation describing defaults, knobs and sizing rules. Drawing is
//! someone else's job.

mod button;
mod checkbox;
mod comment;
mod heading;
mod icon;
mod label;
mod raster;
mod slider;
mod theme;
mod toggle;

pub use button::Button;
pub use checkbox::Checkbox;
pub use comment::Comment;
pub use heading::Heading;
pub use icon::Icon;
pub use label::Label;
pub use raster::Raster;
pub use slider::Slider;
pub use toggle::Toggle;
