use draftkit_core::{round_to_multiple_of_two, Vec2};
use serde::{Deserialize, Serialize};

use super::appearance;
use super::item::DiagramShape;

/// Estimates the rendered extent of a single line of text.
///
/// There is no font machinery in the model layer, so this uses the usual
/// average glyph width heuristic of 0.6em and a line height of 1.2em. Good
/// enough to keep text shapes from clipping their label.
pub fn estimate_text_size(text: &str, font_size: f64) -> Vec2 {
    let width = text.chars().count() as f64 * font_size * 0.6;
    let height = font_size * 1.2;

    Vec2::new(width, height)
}

/// Limits how a shape may be resized.
///
/// A constraint gets the final word on a shape's size: it runs after every
/// transform and after every appearance change, so a text shape re-measures
/// itself when its label changes without the caller doing anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Constraint {
    /// Pins one or both dimensions to a fixed value.
    Size {
        width: Option<f64>,
        height: Option<f64>,
    },
    /// Forces the shape square, using the smaller of the proposed extents.
    MinSize,
    /// Derives the height from the font size plus vertical padding. The
    /// width stays free.
    TextHeight { padding: f64 },
    /// Sizes the shape around its text. When `fixed` is set the adorners
    /// treat both dimensions as derived and disable the resize handles.
    TextSize {
        padding: f64,
        min_width: f64,
        fixed: bool,
    },
}

impl Constraint {
    pub fn size(width: Option<f64>, height: Option<f64>) -> Self {
        Self::Size { width, height }
    }

    pub fn text_height(padding: f64) -> Self {
        Self::TextHeight { padding }
    }

    pub fn text_size(padding: f64, min_width: f64, fixed: bool) -> Self {
        Self::TextSize {
            padding,
            min_width,
            fixed,
        }
    }

    /// Returns the size the shape is allowed to take when `proposed` was
    /// requested.
    ///
    /// `prev` is the shape as it looked before the current change. Text
    /// measuring constraints use it to skip the re-measure when neither the
    /// text nor the font changed, which keeps plain resizes cheap and lets
    /// them through unclamped.
    pub fn update_size(
        &self,
        shape: &DiagramShape,
        proposed: Vec2,
        prev: Option<&DiagramShape>,
    ) -> Vec2 {
        match *self {
            Self::Size { width, height } => Vec2::new(
                width.unwrap_or(proposed.x),
                height.unwrap_or(proposed.y),
            ),
            Self::MinSize => {
                let min = proposed.x.min(proposed.y);

                Vec2::new(min, min)
            }
            Self::TextHeight { padding } => {
                let font_size = shape
                    .appearance_f64(appearance::FONT_SIZE)
                    .unwrap_or(appearance::DEFAULT_FONT_SIZE);

                Vec2::new(
                    proposed.x,
                    round_to_multiple_of_two(font_size * 1.2 + 2.0 * padding),
                )
            }
            Self::TextSize {
                padding, min_width, ..
            } => {
                let font_size = shape
                    .appearance_f64(appearance::FONT_SIZE)
                    .unwrap_or(appearance::DEFAULT_FONT_SIZE);
                let text = shape.appearance_str(appearance::TEXT).unwrap_or("");

                let changed = match prev {
                    Some(prev) => {
                        prev.appearance_str(appearance::TEXT).unwrap_or("") != text
                            || prev
                                .appearance_f64(appearance::FONT_SIZE)
                                .unwrap_or(appearance::DEFAULT_FONT_SIZE)
                                != font_size
                    }
                    None => true,
                };

                let size = if changed {
                    let estimated = estimate_text_size(text, font_size);

                    Vec2::new(
                        (estimated.x + 2.0 * padding).max(min_width),
                        estimated.y + 2.0 * padding,
                    )
                } else {
                    proposed
                };

                size.round_to_multiple_of_two()
            }
        }
    }

    /// Whether the width is derived and the horizontal handles should be
    /// disabled.
    pub fn calculates_width(&self) -> bool {
        match *self {
            Self::Size { width, .. } => width.is_some(),
            Self::MinSize => false,
            Self::TextHeight { .. } => false,
            Self::TextSize { fixed, .. } => fixed,
        }
    }

    /// Whether the height is derived and the vertical handles should be
    /// disabled.
    pub fn calculates_height(&self) -> bool {
        match *self {
            Self::Size { height, .. } => height.is_some(),
            Self::MinSize => false,
            Self::TextHeight { .. } => true,
            Self::TextSize { fixed, .. } => fixed,
        }
    }
}
