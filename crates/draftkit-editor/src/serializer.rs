//! Clipboard and wire codec for item sets.
//!
//! The payload is a flat JSON document:
//!
//! ```json
//! { "visuals": [ { "id": "..", "renderer": "Button",
//!                  "transform": { "position": {"x":0,"y":0}, "size": {"x":100,"y":30}, "rotation": 0 },
//!                  "appearance": { "TEXT": "Ok" } } ],
//!   "groups":  [ { "id": "..", "childIds": ["..", ".."], "rotation": 0 } ] }
//! ```
//!
//! Shapes are not stored whole. Only the renderer name, the transform and
//! the appearance entries go on the wire; configurables and constraints
//! are re-attached by the renderer when the payload is read back.

use std::collections::HashMap;
use std::sync::Arc;

use draftkit_core::{new_id, ImmutableMap, Rotation, Transform};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::SerializerError;
use crate::model::{DiagramGroup, DiagramItemSet, DiagramShape};
use crate::renderer::RendererRegistry;

/// Reads and writes [`DiagramItemSet`] payloads.
///
/// The registry resolves renderer names back to default shapes on read,
/// so a payload only ever overlays what the user actually changed.
#[derive(Debug, Clone)]
pub struct Serializer {
    registry: Arc<RendererRegistry>,
}

impl Serializer {
    pub fn new(registry: Arc<RendererRegistry>) -> Self {
        Self { registry }
    }

    /// Writes a set as JSON.
    ///
    /// With `change_ids` every item gets a fresh id and all child lists
    /// are rewritten to match, so pasting the payload next to its source
    /// never collides. All ids are minted before any child list is
    /// rewritten; child ids pointing outside the set pass through
    /// untouched.
    pub fn serialize_set(&self, set: &DiagramItemSet, change_ids: bool) -> String {
        let mut id_map: HashMap<&str, String> = HashMap::new();
        if change_ids {
            for id in set.all_ids() {
                id_map.insert(id, new_id());
            }
        }

        let visuals: Vec<Value> = set
            .shapes()
            .iter()
            .map(|shape| stored_shape(shape, mapped(&id_map, shape.id())))
            .collect();

        let groups: Vec<Value> = set
            .groups()
            .iter()
            .map(|group| stored_group(group, &id_map))
            .collect();

        json!({ "visuals": visuals, "groups": groups }).to_string()
    }

    /// Reads a set back from JSON.
    ///
    /// Every shape starts from its renderer's default shape; the stored
    /// appearance and transform are overlaid on top. Keys a renderer has
    /// grown since the payload was written keep their defaults that way.
    /// Unknown renderers are an error, as is a payload whose items do not
    /// form a valid set.
    pub fn deserialize_set(&self, json: &str) -> Result<DiagramItemSet, SerializerError> {
        let stored: StoredSet =
            serde_json::from_str(json).map_err(|err| SerializerError::MalformedPayload {
                reason: err.to_string(),
            })?;

        let mut shapes = Vec::with_capacity(stored.visuals.len());
        for visual in stored.visuals {
            shapes.push(self.deserialize_shape(visual)?);
        }

        let groups = stored
            .groups
            .into_iter()
            .map(|group| DiagramGroup::new(group.id, group.child_ids, group.rotation))
            .collect();

        DiagramItemSet::from_parts(groups, shapes).ok_or(SerializerError::InvalidItemSet)
    }

    fn deserialize_shape(&self, stored: StoredShape) -> Result<DiagramShape, SerializerError> {
        let shape = self
            .registry
            .create_default_shape(&stored.renderer, &stored.id)
            .ok_or(SerializerError::UnknownRenderer {
                name: stored.renderer,
            })?;

        let overlay = ImmutableMap::of(stored.appearance);

        Ok(shape
            .merge_appearance(&overlay)
            .transform_with(|_| stored.transform))
    }
}

#[derive(Debug, Deserialize)]
struct StoredSet {
    visuals: Vec<StoredShape>,
    groups: Vec<StoredGroup>,
}

#[derive(Debug, Deserialize)]
struct StoredShape {
    id: String,
    renderer: String,
    transform: Transform,
    #[serde(default)]
    appearance: IndexMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredGroup {
    id: String,
    child_ids: Vec<String>,
    rotation: Rotation,
}

fn mapped<'a>(id_map: &'a HashMap<&str, String>, id: &'a str) -> &'a str {
    id_map.get(id).map(String::as_str).unwrap_or(id)
}

fn stored_shape(shape: &DiagramShape, id: &str) -> Value {
    let appearance: serde_json::Map<String, Value> = shape
        .appearance()
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();

    json!({
        "id": id,
        "renderer": shape.renderer(),
        "transform": {
            "position": { "x": shape.transform().position().x, "y": shape.transform().position().y },
            "size": { "x": shape.transform().size().x, "y": shape.transform().size().y },
            "rotation": shape.transform().rotation().degrees(),
        },
        "appearance": appearance,
    })
}

fn stored_group(group: &DiagramGroup, id_map: &HashMap<&str, String>) -> Value {
    let child_ids: Vec<&str> = group
        .children()
        .iter()
        .map(|child| mapped(id_map, child))
        .collect();

    json!({
        "id": mapped(id_map, group.id()),
        "childIds": child_ids,
        "rotation": group.rotation().degrees(),
    })
}
