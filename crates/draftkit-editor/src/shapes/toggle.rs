use draftkit_core::ImmutableMap;
use serde_json::{json, Value};

use super::theme;
use crate::model::{appearance, Configurable, Constraint, DiagramShape};
use crate::renderer::ShapeRenderer;

const STATE: &str = "STATE";
const STATE_NORMAL: &str = "Normal";
const STATE_CHECKED: &str = "Checked";

/// An on/off switch. Fixed size, the thumb position is the state.
pub struct Toggle;

impl ShapeRenderer for Toggle {
    fn identifier(&self) -> &str {
        "Toggle"
    }

    fn default_appearance(&self) -> ImmutableMap<Value> {
        ImmutableMap::of([
            (appearance::FOREGROUND_COLOR, json!("#ffffff")),
            (
                appearance::BACKGROUND_COLOR,
                json!(theme::CONTROL_BACKGROUND_COLOR),
            ),
            (appearance::STROKE_COLOR, json!(theme::CONTROL_BORDER_COLOR)),
            (
                appearance::STROKE_THICKNESS,
                json!(theme::CONTROL_BORDER_THICKNESS),
            ),
            (STATE, json!(STATE_NORMAL)),
        ])
    }

    fn create_default_shape(&self, shape_id: &str) -> DiagramShape {
        DiagramShape::new(shape_id, self.identifier(), 60.0, 30.0)
            .with_appearance(self.default_appearance())
            .with_configurables(vec![Configurable::selection(
                STATE,
                "State",
                &[STATE_NORMAL, STATE_CHECKED],
            )])
            .with_constraint(Constraint::size(Some(60.0), Some(30.0)))
    }
}
