//! Directed 2D lines.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::error::{KernelError, KernelResult};

/// A directed line from `p0` towards `p1`.
///
/// Intersections treat the line as infinite in both directions.
///
/// # Examples
/// ```
/// use cad_kernel::{Line2D, Point2D};
///
/// let a = Line2D::new(Point2D::new(0.0, 0.0), Point2D::new(2.0, 2.0));
/// let b = Line2D::new(Point2D::new(0.0, 2.0), Point2D::new(2.0, 0.0));
/// assert_eq!(a.intersect(&b), Some(Point2D::new(1.0, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line2D {
    /// Start point.
    pub p0: Point2D,
    /// End point.
    pub p1: Point2D,
}

impl Line2D {
    /// Creates a line from `p0` to `p1`.
    pub fn new(p0: Point2D, p1: Point2D) -> Self {
        Self { p0, p1 }
    }

    /// Vector from the start to the end of this line.
    pub fn vector(&self) -> Point2D {
        self.p1 - self.p0
    }

    /// Length of the segment from `p0` to `p1`.
    pub fn length(&self) -> f64 {
        self.vector().length()
    }

    /// Unit normal, the direction vector turned clockwise by 90 degrees.
    ///
    /// # Errors
    /// [`KernelError::ZeroLengthVector`] when `p0 == p1`.
    pub fn normal(&self) -> KernelResult<Point2D> {
        self.perpendicular().unit()
    }

    fn perpendicular(&self) -> Point2D {
        let v = self.vector();
        Point2D::new(v.y, -v.x)
    }

    /// A parallel line moved along the normal by `offset`.
    pub fn shifted_along_normal(&self, offset: f64) -> KernelResult<Line2D> {
        let v = self.normal()? * offset;
        Ok(Line2D::new(self.p0 + v, self.p1 + v))
    }

    /// Slope `a` and intercept `b` of the equation `y = a*x + b`.
    ///
    /// # Errors
    /// [`KernelError::VerticalLine`] when the line is vertical.
    pub fn as_slope_intercept(&self) -> KernelResult<(f64, f64)> {
        if self.p1.x == self.p0.x {
            return Err(KernelError::VerticalLine);
        }

        let slope = (self.p1.y - self.p0.y) / (self.p1.x - self.p0.x);
        let intercept = self.p0.y - slope * self.p0.x;
        Ok((slope, intercept))
    }

    /// Point where this line crosses `other`, or `None` if they are parallel.
    pub fn intersect(&self, other: &Line2D) -> Option<Point2D> {
        let normal = self.perpendicular();

        let other_vector = other.vector();
        let dot = normal.dot(other_vector);
        if dot == 0.0 {
            return None;
        }

        let w = other.p0 - self.p0;
        let fraction = -normal.dot(w) / dot;
        Some(other.p0 + (other_vector * fraction))
    }

    /// Unsigned angle between this line and `other`, in radians (0..=π).
    ///
    /// # Errors
    /// [`KernelError::DegenerateGeometry`] when either line has zero length.
    pub fn angle(&self, other: &Line2D) -> KernelResult<f64> {
        let denom = self.length() * other.length();
        if denom == 0.0 {
            return Err(KernelError::degenerate("angle against a zero-length line"));
        }
        let num = self.vector().dot(other.vector());
        Ok((num / denom).clamp(-1.0, 1.0).acos())
    }

    /// Signed angle from this line to `other`, in radians (-π..=π).
    /// Counter-clockwise is positive.
    pub fn angle_full(&self, other: &Line2D) -> f64 {
        let v = self.vector();
        let o = other.vector();
        v.cross(o).atan2(v.dot(o))
    }
}

impl fmt::Display for Line2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.p0, self.p1)
    }
}
