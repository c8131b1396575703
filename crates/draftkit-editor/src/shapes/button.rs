use draftkit_core::ImmutableMap;
use serde_json::{json, Value};

use super::theme;
use crate::model::{appearance, Configurable, DiagramShape};
use crate::renderer::ShapeRenderer;

const STYLE: &str = "STYLE";
const STYLE_FILL: &str = "Fill";
const STYLE_OUTLINE: &str = "Outline";

const COLOR: &str = "COLOR";

/// A push button with a centered label.
pub struct Button;

impl ShapeRenderer for Button {
    fn identifier(&self) -> &str {
        "Button"
    }

    fn default_appearance(&self) -> ImmutableMap<Value> {
        ImmutableMap::of([
            (appearance::FOREGROUND_COLOR, json!(theme::CONTROL_TEXT_COLOR)),
            (
                appearance::BACKGROUND_COLOR,
                json!(theme::CONTROL_BACKGROUND_COLOR),
            ),
            (appearance::TEXT, json!("Button")),
            (appearance::TEXT_ALIGNMENT, json!("center")),
            (appearance::FONT_SIZE, json!(theme::CONTROL_FONT_SIZE)),
            (appearance::STROKE_COLOR, json!(theme::CONTROL_BORDER_COLOR)),
            (
                appearance::STROKE_THICKNESS,
                json!(theme::CONTROL_BORDER_THICKNESS),
            ),
            (STYLE, json!(STYLE_FILL)),
            (COLOR, json!(theme::PURPLE)),
        ])
    }

    fn create_default_shape(&self, shape_id: &str) -> DiagramShape {
        DiagramShape::new(shape_id, self.identifier(), 100.0, 30.0)
            .with_appearance(self.default_appearance())
            .with_configurables(vec![
                Configurable::selection(STYLE, "Style", &[STYLE_FILL, STYLE_OUTLINE]),
                Configurable::color(COLOR, "Color"),
            ])
    }
}
