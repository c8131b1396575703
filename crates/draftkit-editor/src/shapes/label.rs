use draftkit_core::ImmutableMap;
use serde_json::{json, Value};

use super::theme;
use crate::model::{appearance, Constraint, DiagramShape};
use crate::renderer::ShapeRenderer;

/// A single line of plain text, sized around its content.
pub struct Label;

impl ShapeRenderer for Label {
    fn identifier(&self) -> &str {
        "Label"
    }

    fn default_appearance(&self) -> ImmutableMap<Value> {
        ImmutableMap::of([
            (appearance::FOREGROUND_COLOR, json!(theme::CONTROL_TEXT_COLOR)),
            (appearance::TEXT, json!("Label")),
            (appearance::TEXT_ALIGNMENT, json!("center")),
            (appearance::FONT_SIZE, json!(theme::CONTROL_FONT_SIZE)),
        ])
    }

    fn create_default_shape(&self, shape_id: &str) -> DiagramShape {
        DiagramShape::new(shape_id, self.identifier(), 46.0, 16.0)
            .with_appearance(self.default_appearance())
            .with_constraint(Constraint::text_size(2.0, 0.0, false))
    }
}
