use draftkit_core::ImmutableMap;
use serde_json::{json, Value};

use super::theme;
use crate::model::{appearance, Configurable, Constraint, DiagramShape};
use crate::renderer::ShapeRenderer;

const ACCENT_COLOR: &str = "ACCENT_COLOR";

const HEIGHT_TOTAL: f64 = 20.0;

/// A horizontal slider. The VALUE appearance entry, 0 to 100, is the
/// thumb position.
pub struct Slider;

impl ShapeRenderer for Slider {
    fn identifier(&self) -> &str {
        "Slider"
    }

    fn default_appearance(&self) -> ImmutableMap<Value> {
        ImmutableMap::of([
            (appearance::FOREGROUND_COLOR, json!("#ffffff")),
            (
                appearance::BACKGROUND_COLOR,
                json!(theme::CONTROL_BACKGROUND_COLOR),
            ),
            (appearance::FONT_SIZE, json!(theme::CONTROL_FONT_SIZE)),
            (appearance::STROKE_COLOR, json!(theme::CONTROL_BORDER_COLOR)),
            (
                appearance::STROKE_THICKNESS,
                json!(theme::CONTROL_BORDER_THICKNESS),
            ),
            (ACCENT_COLOR, json!("#2171b5")),
            (appearance::VALUE, json!(50.0)),
        ])
    }

    fn create_default_shape(&self, shape_id: &str) -> DiagramShape {
        DiagramShape::new(shape_id, self.identifier(), 150.0, HEIGHT_TOTAL)
            .with_appearance(self.default_appearance())
            .with_configurables(vec![
                Configurable::slider(appearance::VALUE, "Value", 0.0, 100.0),
                Configurable::color(ACCENT_COLOR, "Accent Color"),
            ])
            .with_constraint(Constraint::size(None, Some(HEIGHT_TOTAL)))
    }
}
