use draftkit_core::ImmutableMap;
use serde_json::{json, Value};

use super::theme;
use crate::model::{appearance, Configurable, Constraint, DiagramShape};
use crate::renderer::ShapeRenderer;

const COLOR: &str = "COLOR";

/// Bold display text for section titles.
pub struct Heading;

impl ShapeRenderer for Heading {
    fn identifier(&self) -> &str {
        "Heading"
    }

    fn default_appearance(&self) -> ImmutableMap<Value> {
        ImmutableMap::of([
            (appearance::FOREGROUND_COLOR, json!(theme::CONTROL_TEXT_COLOR)),
            (appearance::TEXT, json!("Heading")),
            (appearance::FONT_WEIGHT, json!("bold")),
            (appearance::FONT_SIZE, json!(36.0)),
            (COLOR, json!(theme::CONTROL_TEXT_COLOR)),
        ])
    }

    fn create_default_shape(&self, shape_id: &str) -> DiagramShape {
        DiagramShape::new(shape_id, self.identifier(), 90.0, 30.0)
            .with_appearance(self.default_appearance())
            .with_configurables(vec![
                Configurable::selection(
                    appearance::FONT_SIZE,
                    "Font Size",
                    &["16", "24", "36", "48"],
                ),
                Configurable::color(COLOR, "Color"),
            ])
            .with_constraint(Constraint::text_size(10.0, 0.0, false))
    }
}
