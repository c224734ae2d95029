//! 3D point / vector value type.
//!
//! `Point` is immutable in spirit: every operation returns a new value.
//! Equality is exact floating-point comparison; callers that need a tolerance
//! compare coordinates themselves.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::coordinate_bits;
use crate::error::{KernelError, KernelResult};
use crate::transform::Transform;

/// A position or vector in 3D space.
///
/// Equality is exact, and `Eq` and `Hash` let points key maps and sets.
/// Coordinates are public, so a point can hold NaN (directly, or after a
/// transform overflows). Such a point is not equal to itself and must not be
/// used as a map key.
///
/// # Examples
/// ```
/// use cad_kernel::Point;
///
/// let p = Point::new(1.0, 2.0, 3.0) + Point::new(1.0, 0.0, 0.0);
/// assert_eq!(p, Point::new(2.0, 2.0, 3.0));
/// assert_eq!(p * 2.0, Point::new(4.0, 4.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point::new(0.0, 0.0, 0.0);

    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the coordinates as a tuple.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Returns this point offset by the given amounts.
    pub fn translate(&self, x: f64, y: f64, z: f64) -> Point {
        Point::new(self.x + x, self.y + y, self.z + z)
    }

    /// Returns this point with X negated.
    pub fn mirror_x(&self) -> Point {
        Point::new(-self.x, self.y, self.z)
    }

    /// Returns this point with Y negated.
    pub fn mirror_y(&self) -> Point {
        Point::new(self.x, -self.y, self.z)
    }

    /// Returns this point with Z negated.
    pub fn mirror_z(&self) -> Point {
        Point::new(self.x, self.y, -self.z)
    }

    /// Dot product.
    pub fn dot(&self, other: Point) -> f64 {
        (self.x * other.x) + (self.y * other.y) + (self.z * other.z)
    }

    /// Cross product.
    pub fn cross(&self, other: Point) -> Point {
        Point::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Distance from this point to the origin.
    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Treating this point as a vector, returns a vector of length 1.0.
    ///
    /// # Errors
    /// [`KernelError::ZeroLengthVector`] when the length is zero.
    ///
    /// # Examples
    /// ```
    /// use cad_kernel::Point;
    /// assert_eq!(Point::new(0.0, 3.0, 0.0).unit().unwrap(), Point::new(0.0, 1.0, 0.0));
    /// assert!(Point::ZERO.unit().is_err());
    /// ```
    pub fn unit(&self) -> KernelResult<Point> {
        let length = self.length();
        if length == 0.0 {
            return Err(KernelError::ZeroLengthVector);
        }
        let factor = 1.0 / length;
        Ok(*self * factor)
    }

    /// Unsigned angle between this vector and another, in radians (0..=π).
    ///
    /// # Errors
    /// [`KernelError::DegenerateGeometry`] when either vector has zero length.
    pub fn angle_to(&self, other: Point) -> KernelResult<f64> {
        let denom = self.length() * other.length();
        if denom == 0.0 {
            return Err(KernelError::degenerate(
                "angle against a zero-length vector",
            ));
        }
        Ok((self.dot(other) / denom).clamp(-1.0, 1.0).acos())
    }

    /// A transform translating the origin to this point.
    pub fn to_transform(&self) -> Transform {
        Transform::new().translate(self.x, self.y, self.z)
    }

    /// Returns this point moved by `tf`.
    pub fn transform(&self, tf: &Transform) -> Point {
        tf.apply(*self)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        coordinate_bits(self.x).hash(state);
        coordinate_bits(self.y).hash(state);
        coordinate_bits(self.z).hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, n: f64) -> Point {
        Point::new(self.x * n, self.y * n, self.z * n)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y, -self.z)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point::new(x, y, z)
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Point::new(x, y, z)
    }
}

impl From<Point> for [f64; 3] {
    fn from(p: Point) -> Self {
        [p.x, p.y, p.z]
    }
}

impl From<DVec3> for Point {
    fn from(v: DVec3) -> Self {
        Point::new(v.x, v.y, v.z)
    }
}

impl From<Point> for DVec3 {
    fn from(p: Point) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}
