//! The oriented box every diagram item lives in.

use serde::{Deserialize, Serialize};

use super::{Rect2, Rotation, Vec2};

const EPSILON: f64 = 1e-6;

/// A positioned, oriented box: center position, size and rotation.
///
/// This is the geometric state of every shape and the currency of all
/// selection gestures. Sizes are clamped to be non-negative at every
/// construction site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    position: Vec2,
    size: Vec2,
    rotation: Rotation,
}

impl Transform {
    /// Zero position, zero size, no rotation.
    pub const ZERO: Transform = Transform {
        position: Vec2::ZERO,
        size: Vec2::ZERO,
        rotation: Rotation::ZERO,
    };

    pub fn new(position: Vec2, size: Vec2, rotation: Rotation) -> Self {
        Self {
            position,
            size: size.max(Vec2::ZERO),
            rotation,
        }
    }

    /// An unrotated transform covering the given rectangle.
    pub fn from_rect(rect: Rect2) -> Self {
        Self::new(rect.center(), rect.size, Rotation::ZERO)
    }

    /// An unrotated transform covering the union of the given rectangles.
    pub fn from_rects<I>(rects: I) -> Self
    where
        I: IntoIterator<Item = Rect2>,
    {
        Self::from_rect(Rect2::from_rects(rects))
    }

    /// The aggregate bounds of several transforms under a shared rotation.
    ///
    /// Un-rotates all transforms around the mean of their centers, takes
    /// the union of the resulting bounds and rotates the union back. This
    /// is how a multi-selection of rotated shapes gets its adorner box.
    /// Empty input yields [`Transform::ZERO`].
    pub fn from_transforms_and_rotation(transforms: &[Transform], rotation: Rotation) -> Self {
        if transforms.is_empty() {
            return Transform::ZERO;
        }

        let anchor = Vec2::average(transforms.iter().map(|t| t.position));
        let negated = rotation.negate();

        let bounds = Rect2::from_rects(
            transforms
                .iter()
                .map(|t| t.rotate_around(anchor, negated).aabb()),
        );

        Self::from_rect(bounds).rotate_around(anchor, rotation)
    }

    /// The center of the box.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn half_size(&self) -> Vec2 {
        self.size.half()
    }

    /// The axis-aligned bounds of the rotated box.
    pub fn aabb(&self) -> Rect2 {
        Rect2::rotated(self.position, self.size, self.rotation)
    }

    pub fn move_to(&self, position: Vec2) -> Self {
        Self::new(position, self.size, self.rotation)
    }

    pub fn move_by(&self, delta: Vec2) -> Self {
        Self::new(self.position + delta, self.size, self.rotation)
    }

    pub fn resize_to(&self, size: Vec2) -> Self {
        Self::new(self.position, size, self.rotation)
    }

    pub fn resize_and_move_by(&self, size: Vec2, delta: Vec2) -> Self {
        Self::new(self.position + delta, size, self.rotation)
    }

    /// Resizes while keeping the rotated top-left corner in place.
    ///
    /// The center shifts by half the size delta, rotated into the box's
    /// frame. Constraints use this so a re-measured shape grows to the
    /// right and down, the way text boxes are expected to.
    pub fn resize_top_left(&self, size: Vec2) -> Self {
        let size = size.max(Vec2::ZERO);
        if self.size == size {
            return *self;
        }

        let dw = size.x - self.size.x;
        let dh = size.y - self.size.y;

        let shift_x = Vec2::new(0.5 * dw, 0.0).rotated_around(Vec2::ZERO, self.rotation);
        let shift_y = Vec2::new(0.0, 0.5 * dh).rotated_around(Vec2::ZERO, self.rotation);

        self.resize_and_move_by(size, shift_x + shift_y)
    }

    pub fn rotate_to(&self, rotation: Rotation) -> Self {
        Self::new(self.position, self.size, rotation)
    }

    pub fn rotate_by(&self, rotation: Rotation) -> Self {
        Self::new(self.position, self.size, self.rotation + rotation)
    }

    /// Orbits the center around `anchor` and composes the rotation.
    pub fn rotate_around(&self, anchor: Vec2, rotation: Rotation) -> Self {
        Self::new(
            self.position.rotated_around(anchor, rotation),
            self.size,
            self.rotation + rotation,
        )
    }

    /// Snaps the box to the pixel grid.
    ///
    /// The size rounds to whole units. Each center coordinate rounds to an
    /// integer when the rounded size on that axis is even and to an integer
    /// plus one half when it is odd, which keeps the edges integral either
    /// way.
    pub fn round(&self) -> Self {
        let size = self.size.round();
        let position = Vec2::new(
            round_center(self.position.x, size.x),
            round_center(self.position.y, size.y),
        );
        Self::new(position, size, self.rotation)
    }

    /// Re-derives this transform after its enclosing bounds changed.
    ///
    /// The center is expressed as a fractional offset inside `old_bounds`'
    /// unrotated frame and the fraction is reapplied to `new_bounds`. The
    /// size scales by the per-axis bounds ratio and the rotation picks up
    /// the bounds' rotation delta. A zero-sized axis on `old_bounds`
    /// degenerates gracefully: the fraction falls back to the center and
    /// the scale to one.
    pub fn transform_by_bounds(&self, old_bounds: &Transform, new_bounds: &Transform) -> Self {
        if old_bounds == new_bounds {
            return *self;
        }

        let scale_x = axis_ratio(new_bounds.size.x, old_bounds.size.x);
        let scale_y = axis_ratio(new_bounds.size.y, old_bounds.size.y);

        // Center relative to the old bounds, in their unrotated frame.
        let local = (self.position - old_bounds.position)
            .rotated_around(Vec2::ZERO, old_bounds.rotation.negate());

        let fraction_x = axis_fraction(local.x, old_bounds.size.x);
        let fraction_y = axis_fraction(local.y, old_bounds.size.y);

        let replayed = Vec2::new(
            fraction_x * new_bounds.size.x,
            fraction_y * new_bounds.size.y,
        )
        .rotated_around(Vec2::ZERO, new_bounds.rotation);

        Self::new(
            new_bounds.position + replayed,
            Vec2::new(self.size.x * scale_x, self.size.y * scale_y),
            self.rotation + new_bounds.rotation - old_bounds.rotation,
        )
    }
}

fn axis_ratio(new_size: f64, old_size: f64) -> f64 {
    if old_size.abs() > EPSILON {
        new_size / old_size
    } else {
        1.0
    }
}

fn axis_fraction(local: f64, old_size: f64) -> f64 {
    if old_size.abs() > EPSILON {
        local / old_size
    } else {
        0.0
    }
}

fn round_center(value: f64, size: f64) -> f64 {
    if (size.round() as i64) % 2 == 0 {
        value.round()
    } else {
        value.floor() + 0.5
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::ZERO
    }
}
