//! 2D point / vector value type.
//!
//! The 2D analogue of [`crate::Point`], used for wall profiles and
//! [`crate::Line2D`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::coordinate_bits;
use crate::error::{KernelError, KernelResult};

/// A position or vector in the plane.
///
/// Equality is exact. As with [`crate::Point`], a NaN coordinate makes the
/// value unequal to itself, so it must not be used as a map key.
///
/// # Examples
/// ```
/// use cad_kernel::Point2D;
/// let v = Point2D::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// The origin.
    pub const ZERO: Point2D = Point2D::new(0.0, 0.0);

    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinates as a tuple.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns this point offset by the given amounts.
    pub fn translate(&self, x: f64, y: f64) -> Point2D {
        Point2D::new(self.x + x, self.y + y)
    }

    /// Dot product.
    pub fn dot(&self, other: Point2D) -> f64 {
        (self.x * other.x) + (self.y * other.y)
    }

    /// Z component of the 3D cross product; positive when `other` lies
    /// counter-clockwise of `self`.
    pub fn cross(&self, other: Point2D) -> f64 {
        (self.x * other.y) - (self.y * other.x)
    }

    /// Distance from this point to the origin.
    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Treating this point as a vector, returns a vector of length 1.0.
    ///
    /// # Errors
    /// [`KernelError::ZeroLengthVector`] when the length is zero.
    pub fn unit(&self) -> KernelResult<Point2D> {
        let length = self.length();
        if length == 0.0 {
            return Err(KernelError::ZeroLengthVector);
        }
        let factor = 1.0 / length;
        Ok(*self * factor)
    }
}

impl PartialEq for Point2D {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point2D {}

impl Hash for Point2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        coordinate_bits(self.x).hash(state);
        coordinate_bits(self.y).hash(state);
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, other: Point2D) -> Point2D {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, other: Point2D) -> Point2D {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    fn mul(self, n: f64) -> Point2D {
        Point2D::new(self.x * n, self.y * n)
    }
}

impl Neg for Point2D {
    type Output = Point2D;

    fn neg(self) -> Point2D {
        Point2D::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

impl From<DVec2> for Point2D {
    fn from(v: DVec2) -> Self {
        Point2D::new(v.x, v.y)
    }
}

impl From<Point2D> for DVec2 {
    fn from(p: Point2D) -> Self {
        DVec2::new(p.x, p.y)
    }
}
