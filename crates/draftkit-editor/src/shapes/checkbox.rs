use draftkit_core::ImmutableMap;
use serde_json::{json, Value};

use super::theme;
use crate::model::{appearance, Configurable, Constraint, DiagramShape};
use crate::renderer::ShapeRenderer;

const STATE: &str = "STATE";
const STATE_NORMAL: &str = "Normal";
const STATE_CHECKED: &str = "Checked";
const STATE_INTERDEMINATE: &str = "Interdeminate";

/// A checkbox with a trailing label. The height tracks the font size.
pub struct Checkbox;

impl ShapeRenderer for Checkbox {
    fn identifier(&self) -> &str {
        "Checkbox"
    }

    fn default_appearance(&self) -> ImmutableMap<Value> {
        ImmutableMap::of([
            (appearance::FOREGROUND_COLOR, json!(theme::CONTROL_TEXT_COLOR)),
            (
                appearance::BACKGROUND_COLOR,
                json!(theme::CONTROL_BACKGROUND_COLOR),
            ),
            (appearance::TEXT, json!("Checkbox")),
            (appearance::TEXT_ALIGNMENT, json!("left")),
            (appearance::FONT_SIZE, json!(theme::CONTROL_FONT_SIZE)),
            (appearance::STROKE_COLOR, json!(theme::CONTROL_BORDER_COLOR)),
            (
                appearance::STROKE_THICKNESS,
                json!(theme::CONTROL_BORDER_THICKNESS),
            ),
            (STATE, json!(STATE_NORMAL)),
        ])
    }

    fn create_default_shape(&self, shape_id: &str) -> DiagramShape {
        DiagramShape::new(shape_id, self.identifier(), 104.0, 36.0)
            .with_appearance(self.default_appearance())
            .with_configurables(vec![Configurable::selection(
                STATE,
                "State",
                &[STATE_NORMAL, STATE_CHECKED, STATE_INTERDEMINATE],
            )])
            .with_constraint(Constraint::text_height(8.0))
    }
}
