use draftkit_core::ImmutableMap;
use serde_json::{json, Value};

use super::theme;
use crate::model::{appearance, Constraint, DiagramShape};
use crate::renderer::ShapeRenderer;

/// A single glyph from an icon font. Placed from the icon browser, not
/// the gallery, with the glyph delivered through the TEXT entry.
pub struct Icon;

impl ShapeRenderer for Icon {
    fn identifier(&self) -> &str {
        "Icon"
    }

    fn default_appearance(&self) -> ImmutableMap<Value> {
        ImmutableMap::of([
            (appearance::FOREGROUND_COLOR, json!(theme::CONTROL_TEXT_COLOR)),
            (appearance::TEXT, json!("")),
            (appearance::ICON_FONT_FAMILY, json!("FontAwesome")),
        ])
    }

    fn create_default_shape(&self, shape_id: &str) -> DiagramShape {
        DiagramShape::new(shape_id, self.identifier(), 40.0, 40.0)
            .with_appearance(self.default_appearance())
            .with_constraint(Constraint::MinSize)
    }

    fn show_in_gallery(&self) -> bool {
        false
    }
}
