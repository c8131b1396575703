//! The seam between the document model and whatever draws it.
//!
//! The model never draws. Every visual carries the name of a renderer, and
//! the registry resolves that name when a default shape is needed or when
//! a bulk style change asks whether a key is supported. Actual rasterizing
//! lives behind this trait, outside this crate.

use std::fmt;

use draftkit_core::{ImmutableMap, Vec2};
use indexmap::IndexMap;
use serde_json::Value;

use crate::model::DiagramShape;
use crate::shapes;

/// A kind of shape the editor can place.
pub trait ShapeRenderer: Send + Sync {
    /// Unique name, stored in every shape this renderer owns.
    fn identifier(&self) -> &str;

    /// The appearance a freshly placed shape starts with. This doubles as
    /// the list of keys the renderer understands.
    fn default_appearance(&self) -> ImmutableMap<Value>;

    /// A fresh shape with the renderer's default size, appearance,
    /// configurables and constraint.
    fn create_default_shape(&self, shape_id: &str) -> DiagramShape;

    /// Whether the shape gallery offers this renderer directly.
    fn show_in_gallery(&self) -> bool {
        true
    }

    /// Offset applied to the drag preview while placing from the gallery.
    fn preview_offset(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Whether a bulk style change may write this key.
    fn supports_appearance(&self, key: &str) -> bool {
        self.default_appearance().contains_key(key)
    }
}

/// All registered renderers, looked up by identifier.
///
/// Registration order is preserved; it is the order the gallery lists
/// shapes in.
pub struct RendererRegistry {
    renderers: IndexMap<String, Box<dyn ShapeRenderer>>,
}

impl RendererRegistry {
    pub fn empty() -> Self {
        Self {
            renderers: IndexMap::new(),
        }
    }

    /// Adds a renderer, replacing any previous one with the same
    /// identifier.
    pub fn register(mut self, renderer: impl ShapeRenderer + 'static) -> Self {
        self.renderers
            .insert(renderer.identifier().to_string(), Box::new(renderer));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn ShapeRenderer> {
        self.renderers.get(name).map(Box::as_ref)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ShapeRenderer> {
        self.renderers.values().map(Box::as_ref)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.renderers.keys().map(String::as_str)
    }

    /// Creates the default shape for a renderer name, if registered.
    pub fn create_default_shape(&self, renderer: &str, shape_id: &str) -> Option<DiagramShape> {
        self.get(renderer)
            .map(|renderer| renderer.create_default_shape(shape_id))
    }
}

impl Default for RendererRegistry {
    /// The built-in shape library.
    fn default() -> Self {
        Self::empty()
            .register(shapes::Button)
            .register(shapes::Label)
            .register(shapes::Heading)
            .register(shapes::Checkbox)
            .register(shapes::Toggle)
            .register(shapes::Slider)
            .register(shapes::Comment)
            .register(shapes::Icon)
            .register(shapes::Raster)
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.renderers.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::appearance;

    #[test]
    fn default_registry_contains_the_library() {
        let registry = RendererRegistry::default();

        assert!(registry.get("Button").is_some());
        assert!(registry.get("Raster").is_some());
        assert!(registry.get("Unknown").is_none());
        assert_eq!(registry.len(), 9);
    }

    #[test]
    fn created_shapes_carry_their_renderer_name() {
        let registry = RendererRegistry::default();

        for renderer in registry.iter() {
            let shape = renderer.create_default_shape("s1");
            assert_eq!(shape.renderer(), renderer.identifier());
            assert_eq!(shape.id(), "s1");
        }
    }

    #[test]
    fn support_follows_default_appearance() {
        let registry = RendererRegistry::default();
        let button = registry.get("Button").unwrap();

        assert!(button.supports_appearance(appearance::TEXT));
        assert!(!button.supports_appearance("?"));
    }
}
