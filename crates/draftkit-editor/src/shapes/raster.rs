use draftkit_core::ImmutableMap;
use serde_json::{json, Value};

use crate::model::{appearance, DiagramShape};
use crate::renderer::ShapeRenderer;

/// A bitmap image. The SOURCE entry holds the image location; dropping
/// an image on the canvas creates one of these.
pub struct Raster;

impl ShapeRenderer for Raster {
    fn identifier(&self) -> &str {
        "Raster"
    }

    fn default_appearance(&self) -> ImmutableMap<Value> {
        ImmutableMap::of([(appearance::SOURCE, json!(""))])
    }

    fn create_default_shape(&self, shape_id: &str) -> DiagramShape {
        DiagramShape::new(shape_id, self.identifier(), 80.0, 30.0)
            .with_appearance(self.default_appearance())
    }

    fn show_in_gallery(&self) -> bool {
        false
    }
}
