//! Rotation angle normalized to degrees.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::math::to_positive_degree;

/// A rotation, stored in degrees normalized to `[0, 360)`.
///
/// Cosine and sine are computed once at construction; transform math reads
/// them on every corner of every shape, so they are kept hot.
///
/// Serializes as a bare number of degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Rotation {
    degrees: f64,
    cos: f64,
    sin: f64,
}

impl Rotation {
    /// No rotation.
    pub const ZERO: Rotation = Rotation {
        degrees: 0.0,
        cos: 1.0,
        sin: 0.0,
    };

    /// Creates a rotation from degrees. The value is normalized.
    pub fn from_degrees(degrees: f64) -> Self {
        let degrees = to_positive_degree(degrees);
        let radians = degrees.to_radians();
        Self {
            degrees,
            cos: radians.cos(),
            sin: radians.sin(),
        }
    }

    /// Creates a rotation from radians.
    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    /// The normalized angle in degrees.
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// The angle in radians.
    pub fn radians(&self) -> f64 {
        self.degrees.to_radians()
    }

    pub fn cos(&self) -> f64 {
        self.cos
    }

    pub fn sin(&self) -> f64 {
        self.sin
    }

    /// The opposite rotation, so that `r + r.negate() == Rotation::ZERO`.
    pub fn negate(&self) -> Self {
        Self::from_degrees(360.0 - self.degrees)
    }

    /// True for angles that are a multiple of 360.
    pub fn is_zero(&self) -> bool {
        self.degrees == 0.0
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::ZERO
    }
}

impl PartialEq for Rotation {
    fn eq(&self, other: &Self) -> bool {
        self.degrees == other.degrees
    }
}

impl Add for Rotation {
    type Output = Rotation;

    fn add(self, rhs: Rotation) -> Rotation {
        Rotation::from_degrees(self.degrees + rhs.degrees)
    }
}

impl Sub for Rotation {
    type Output = Rotation;

    fn sub(self, rhs: Rotation) -> Rotation {
        Rotation::from_degrees(self.degrees - rhs.degrees)
    }
}

impl From<f64> for Rotation {
    fn from(degrees: f64) -> Self {
        Rotation::from_degrees(degrees)
    }
}

impl From<Rotation> for f64 {
    fn from(rotation: Rotation) -> f64 {
        rotation.degrees
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees)
    }
}
