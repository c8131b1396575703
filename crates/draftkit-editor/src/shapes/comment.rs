use draftkit_core::ImmutableMap;
use serde_json::{json, Value};

use super::theme;
use crate::model::{appearance, Configurable, DiagramShape};
use crate::renderer::ShapeRenderer;

const COLOR: &str = "COLOR";

/// A sticky note with a folded corner.
pub struct Comment;

impl ShapeRenderer for Comment {
    fn identifier(&self) -> &str {
        "Comment"
    }

    fn default_appearance(&self) -> ImmutableMap<Value> {
        ImmutableMap::of([
            (appearance::TEXT, json!("")),
            (appearance::TEXT_ALIGNMENT, json!("left")),
            (appearance::FONT_SIZE, json!(theme::CONTROL_FONT_SIZE)),
            (appearance::STROKE_THICKNESS, json!(1.0)),
            (COLOR, json!(theme::YELLOW)),
        ])
    }

    fn create_default_shape(&self, shape_id: &str) -> DiagramShape {
        DiagramShape::new(shape_id, self.identifier(), 180.0, 170.0)
            .with_appearance(self.default_appearance())
            .with_configurables(vec![Configurable::color(COLOR, "Color")])
    }
}
