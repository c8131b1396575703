//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use super::{Rotation, Vec2};

/// An axis-aligned rectangle described by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect2 {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect2 {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect2 = Rect2 {
        position: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Creates a rectangle from its center and size.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size.half(), size)
    }

    /// The union of the given rectangles. Empty input yields
    /// [`Rect2::ZERO`].
    pub fn from_rects<I>(rects: I) -> Self
    where
        I: IntoIterator<Item = Rect2>,
    {
        let mut min = Vec2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut any = false;

        for rect in rects {
            min = min.min(rect.position);
            max = max.max(Vec2::new(rect.right(), rect.bottom()));
            any = true;
        }

        if !any {
            return Rect2::ZERO;
        }
        Rect2::new(min, max - min)
    }

    /// The axis-aligned bounds of a rotated rectangle centered at `center`.
    ///
    /// Rotates the four corners around the center and folds min/max over
    /// them. With zero rotation this is just the unrotated rectangle.
    pub fn rotated(center: Vec2, size: Vec2, rotation: Rotation) -> Self {
        if rotation.is_zero() {
            return Self::from_center(center, size);
        }

        let half = size.half();
        let corners = [
            Vec2::new(center.x - half.x, center.y - half.y),
            Vec2::new(center.x + half.x, center.y - half.y),
            Vec2::new(center.x + half.x, center.y + half.y),
            Vec2::new(center.x - half.x, center.y + half.y),
        ];

        let mut min = Vec2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

        for corner in corners {
            let p = corner.rotated_around(center, rotation);
            min = min.min(p);
            max = max.max(p);
        }

        Rect2::new(min, max - min)
    }

    pub fn left(&self) -> f64 {
        self.position.x
    }

    pub fn top(&self) -> f64 {
        self.position.y
    }

    pub fn right(&self) -> f64 {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.y
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size.half()
    }

    pub fn center_x(&self) -> f64 {
        self.position.x + 0.5 * self.size.x
    }

    pub fn center_y(&self) -> f64 {
        self.position.y + 0.5 * self.size.y
    }

    pub fn area(&self) -> f64 {
        self.size.x * self.size.y
    }

    /// True when the point lies inside or on the boundary.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// True when `other` lies fully inside this rectangle.
    pub fn contains_rect(&self, other: &Rect2) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// True when the rectangles overlap, boundary touches included.
    pub fn intersects(&self, other: &Rect2) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    /// Grows the rectangle by `amount` on every side.
    pub fn inflate(&self, amount: f64) -> Self {
        Self::new(
            self.position - Vec2::new(amount, amount),
            self.size + Vec2::new(2.0 * amount, 2.0 * amount),
        )
    }
}
