//! 2D vector type used for positions, sizes and deltas.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use super::Rotation;

/// An immutable 2D vector.
///
/// Doubles as a point and as a size depending on context. Sizes keep the
/// same arithmetic; nothing here enforces positivity, that is the job of
/// [`super::Transform`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The origin.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// The unit vector (1, 1).
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    /// Creates a new vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Both components rounded to the nearest integer.
    pub fn round(&self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    /// Both components rounded to the nearest multiple of two.
    pub fn round_to_multiple_of_two(&self) -> Self {
        Self::new(
            crate::math::round_to_multiple_of_two(self.x),
            crate::math::round_to_multiple_of_two(self.y),
        )
    }

    /// Component-wise maximum.
    pub fn max(&self, other: Vec2) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise minimum.
    pub fn min(&self, other: Vec2) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise product.
    pub fn mul_vec(&self, other: Vec2) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Negated vector.
    pub fn negate(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Half of this vector. Handy for center/size conversions.
    pub fn half(&self) -> Self {
        Self::new(0.5 * self.x, 0.5 * self.y)
    }

    /// Rotates this point around `center`.
    pub fn rotated_around(&self, center: Vec2, rotation: Rotation) -> Self {
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Self::new(
            center.x + dx * rotation.cos() - dy * rotation.sin(),
            center.y + dx * rotation.sin() + dy * rotation.cos(),
        )
    }

    /// Component-wise mean of the given points. Empty input yields the
    /// origin.
    pub fn average<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut sum = Vec2::ZERO;
        let mut count = 0usize;
        for p in points {
            sum += p;
            count += 1;
        }
        if count == 0 {
            return Vec2::ZERO;
        }
        sum / count as f64
    }

    /// True when both components differ by less than `epsilon`.
    pub fn approx_eq(&self, other: Vec2, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        self.negate()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_around_center() {
        let p = Vec2::new(10.0, 0.0);
        let r = p.rotated_around(Vec2::ZERO, Rotation::from_degrees(90.0));

        assert!(r.approx_eq(Vec2::new(0.0, 10.0), 1e-9));
    }

    #[test]
    fn average_of_empty_is_origin() {
        assert_eq!(Vec2::average(std::iter::empty()), Vec2::ZERO);
    }

    #[test]
    fn averages_components() {
        let avg = Vec2::average([Vec2::new(0.0, 0.0), Vec2::new(10.0, 20.0)]);

        assert_eq!(avg, Vec2::new(5.0, 10.0));
    }
}
