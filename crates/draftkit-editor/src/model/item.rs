use std::sync::Arc;

use draftkit_core::{ImmutableMap, Rotation, Transform, Vec2, WithId};
use serde_json::Value;

use super::configurables::Configurable;
use super::constraints::Constraint;
use super::container::DiagramContainer;
use super::diagram::Diagram;

/// A leaf shape: a renderer name plus the state the renderer draws from.
///
/// Shapes are values. Every mutator returns a new shape and hands the
/// current one back (same allocations) when nothing changed, so diagram
/// level code can short circuit on identity.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramShape {
    id: String,
    locked: bool,
    renderer: String,
    transform: Transform,
    appearance: ImmutableMap<Value>,
    configurables: Arc<[Configurable]>,
    constraint: Option<Constraint>,
}

impl DiagramShape {
    /// A new shape centered at the origin.
    pub fn new(id: impl Into<String>, renderer: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            locked: false,
            renderer: renderer.into(),
            transform: Transform::new(Vec2::ZERO, Vec2::new(width, height), Rotation::ZERO),
            appearance: ImmutableMap::empty(),
            configurables: Arc::from(Vec::new()),
            constraint: None,
        }
    }

    pub fn with_appearance(mut self, appearance: ImmutableMap<Value>) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn with_configurables(mut self, configurables: Vec<Configurable>) -> Self {
        self.configurables = Arc::from(configurables);
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn renderer(&self) -> &str {
        &self.renderer
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn appearance(&self) -> &ImmutableMap<Value> {
        &self.appearance
    }

    pub fn configurables(&self) -> &[Configurable] {
        &self.configurables
    }

    pub fn constraint(&self) -> Option<&Constraint> {
        self.constraint.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn appearance_f64(&self, key: &str) -> Option<f64> {
        self.appearance.get(key).and_then(Value::as_f64)
    }

    pub fn appearance_str(&self, key: &str) -> Option<&str> {
        self.appearance.get(key).and_then(Value::as_str)
    }

    pub fn set_locked(&self, locked: bool) -> Self {
        if locked == self.locked {
            return self.clone();
        }

        Self {
            locked,
            ..self.clone()
        }
    }

    /// Sets one appearance entry. Writing the value already present returns
    /// the shape unchanged.
    pub fn set_appearance(&self, key: &str, value: impl Into<Value>) -> Self {
        let appearance = self.appearance.set(key, value.into());
        if appearance.ptr_eq(&self.appearance) {
            return self.clone();
        }

        Self {
            appearance,
            ..self.clone()
        }
        .constrained(self)
    }

    pub fn unset_appearance(&self, key: &str) -> Self {
        let appearance = self.appearance.remove(key);
        if appearance.ptr_eq(&self.appearance) {
            return self.clone();
        }

        Self {
            appearance,
            ..self.clone()
        }
        .constrained(self)
    }

    /// Overlays the given entries on top of the current appearance.
    pub fn merge_appearance(&self, overlay: &ImmutableMap<Value>) -> Self {
        let appearance = self.appearance.merge(overlay);
        if appearance.ptr_eq(&self.appearance) {
            return self.clone();
        }

        Self {
            appearance,
            ..self.clone()
        }
        .constrained(self)
    }

    /// Applies `f` to the transform. The result is rounded to the pixel
    /// grid and run through the constraint, if any.
    pub fn transform_with<F>(&self, f: F) -> Self
    where
        F: FnOnce(Transform) -> Transform,
    {
        let transform = f(self.transform).round();
        if transform == self.transform {
            return self.clone();
        }

        Self {
            transform,
            ..self.clone()
        }
        .constrained(self)
    }

    /// Re-derives the transform after the enclosing selection bounds moved
    /// from `old_bounds` to `new_bounds`.
    pub fn transform_by_bounds(&self, old_bounds: &Transform, new_bounds: &Transform) -> Self {
        if old_bounds == new_bounds {
            return self.clone();
        }

        let transform = self
            .transform
            .transform_by_bounds(old_bounds, new_bounds)
            .round();
        if transform == self.transform {
            return self.clone();
        }

        Self {
            transform,
            ..self.clone()
        }
        .constrained(self)
    }

    /// Gives the constraint the final word on the size. `prev` is the shape
    /// before the mutation that got us here.
    fn constrained(self, prev: &DiagramShape) -> Self {
        let constraint = match &self.constraint {
            None => return self,
            Some(constraint) => constraint.clone(),
        };

        let size = constraint.update_size(&self, self.transform.size(), Some(prev));
        let transform = self.transform.resize_top_left(size).round();

        if transform == self.transform {
            return self;
        }
        Self { transform, ..self }
    }
}

impl WithId for DiagramShape {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A group of items, referenced by id.
///
/// Groups carry no geometry of their own apart from a rotation. Their
/// bounds are derived from the children on demand, so moving a child moves
/// the group box without any bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramGroup {
    id: String,
    locked: bool,
    children: DiagramContainer,
    rotation: Rotation,
}

impl DiagramGroup {
    pub fn new<I, S>(id: impl Into<String>, child_ids: I, rotation: Rotation) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            locked: false,
            children: DiagramContainer::of(child_ids),
            rotation,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn children(&self) -> &DiagramContainer {
        &self.children
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&self, locked: bool) -> Self {
        if locked == self.locked {
            return self.clone();
        }

        Self {
            locked,
            ..self.clone()
        }
    }

    pub(crate) fn with_children(&self, children: DiagramContainer) -> Self {
        if children.ptr_eq(&self.children) {
            return self.clone();
        }

        Self {
            children,
            ..self.clone()
        }
    }

    /// The aggregate bounds of all resolvable children under the group's
    /// rotation. A group whose children all dangle has zero bounds.
    pub fn bounds(&self, diagram: &Diagram) -> Transform {
        let transforms: Vec<Transform> = self
            .children
            .iter()
            .filter_map(|id| diagram.items().get(id))
            .map(|item| item.bounds(diagram))
            .collect();

        Transform::from_transforms_and_rotation(&transforms, self.rotation)
    }

    /// Groups only pick up the rotation delta: the children are transformed
    /// alongside and the derived bounds follow them.
    pub fn transform_by_bounds(&self, old_bounds: &Transform, new_bounds: &Transform) -> Self {
        if old_bounds == new_bounds {
            return self.clone();
        }

        let rotation = self.rotation + new_bounds.rotation() - old_bounds.rotation();
        if rotation == self.rotation {
            return self.clone();
        }

        Self {
            rotation,
            ..self.clone()
        }
    }
}

impl WithId for DiagramGroup {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Either kind of diagram item.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramItem {
    Shape(DiagramShape),
    Group(DiagramGroup),
}

impl DiagramItem {
    pub fn id(&self) -> &str {
        match self {
            Self::Shape(shape) => shape.id(),
            Self::Group(group) => group.id(),
        }
    }

    pub fn is_locked(&self) -> bool {
        match self {
            Self::Shape(shape) => shape.is_locked(),
            Self::Group(group) => group.is_locked(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    pub fn as_shape(&self) -> Option<&DiagramShape> {
        match self {
            Self::Shape(shape) => Some(shape),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&DiagramGroup> {
        match self {
            Self::Group(group) => Some(group),
            Self::Shape(_) => None,
        }
    }

    pub fn set_locked(&self, locked: bool) -> Self {
        match self {
            Self::Shape(shape) => Self::Shape(shape.set_locked(locked)),
            Self::Group(group) => Self::Group(group.set_locked(locked)),
        }
    }

    /// The item's bounds: a shape's own transform, a group's derived box.
    pub fn bounds(&self, diagram: &Diagram) -> Transform {
        match self {
            Self::Shape(shape) => shape.transform(),
            Self::Group(group) => group.bounds(diagram),
        }
    }

    pub fn transform_by_bounds(&self, old_bounds: &Transform, new_bounds: &Transform) -> Self {
        match self {
            Self::Shape(shape) => Self::Shape(shape.transform_by_bounds(old_bounds, new_bounds)),
            Self::Group(group) => Self::Group(group.transform_by_bounds(old_bounds, new_bounds)),
        }
    }
}

impl WithId for DiagramItem {
    fn id(&self) -> &str {
        DiagramItem::id(self)
    }
}

impl From<DiagramShape> for DiagramItem {
    fn from(shape: DiagramShape) -> Self {
        Self::Shape(shape)
    }
}

impl From<DiagramGroup> for DiagramItem {
    fn from(group: DiagramGroup) -> Self {
        Self::Group(group)
    }
}
