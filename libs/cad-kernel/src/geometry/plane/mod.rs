//! Oriented planes defined by three points.

use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{KernelError, KernelResult};

/// A plane through three points.
///
/// The orientation follows the order of the points: the normal is the
/// negated, normalized cross product of `p1 - p0` and `p2 - p0`.
///
/// # Examples
/// ```
/// use cad_kernel::{Plane, Point};
///
/// let ground = Plane::new(Point::ZERO, Point::new(1.0, 0.0, 0.0), Point::new(0.0, 1.0, 0.0));
/// let hit = ground.intersect_line(Point::new(0.0, 0.0, -1.0), Point::new(0.0, 0.0, 1.0));
/// assert_eq!(hit, Some(Point::ZERO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// First defining point.
    pub p0: Point,
    /// Second defining point.
    pub p1: Point,
    /// Third defining point.
    pub p2: Point,
}

impl Plane {
    /// Creates a plane from three points.
    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self { p0, p1, p2 }
    }

    /// Unit normal vector of the plane.
    ///
    /// # Errors
    /// [`KernelError::DegeneratePlane`] when the three points are collinear.
    pub fn normal(&self) -> KernelResult<Point> {
        match self.raw_normal().unit() {
            Ok(n) => Ok(n * -1.0),
            Err(_) => Err(KernelError::DegeneratePlane),
        }
    }

    fn raw_normal(&self) -> Point {
        (self.p1 - self.p0).cross(self.p2 - self.p0)
    }

    /// Point where the line through `line0` and `line1` crosses this plane.
    ///
    /// Returns `None` if the line is parallel to the plane, or if the plane is
    /// degenerate.
    pub fn intersect_line(&self, line0: Point, line1: Point) -> Option<Point> {
        let normal = self.raw_normal();

        let line_vector = line1 - line0;
        let dot = normal.dot(line_vector);
        if dot == 0.0 {
            return None;
        }

        let w = line0 - self.p0;
        let fraction = -normal.dot(w) / dot;
        Some(line0 + (line_vector * fraction))
    }

    /// Z coordinate of the plane at the given X/Y position.
    ///
    /// # Errors
    /// [`KernelError::VerticalPlane`] when the plane is vertical or degenerate.
    pub fn z_intersect(&self, x: f64, y: f64) -> KernelResult<f64> {
        self.intersect_line(Point::new(x, y, 0.0), Point::new(x, y, 1.0))
            .map(|p| p.z)
            .ok_or(KernelError::VerticalPlane { x, y })
    }

    /// A parallel plane moved along the normal by `offset`.
    ///
    /// Used to thicken a wall inwards or outwards while keeping its
    /// orientation.
    pub fn shifted_along_normal(&self, offset: f64) -> KernelResult<Plane> {
        let v = self.normal()? * offset;
        Ok(Plane::new(self.p0 + v, self.p1 + v, self.p2 + v))
    }

    /// Line along which this plane and `other` meet, as two distinct points
    /// on it.
    ///
    /// The edges `p0-p1`, `p0-p2` and `p1-p2` of `other` are intersected with
    /// this plane in turn until two distinct points are found. A crossing that
    /// repeats the first point, as happens when a vertex of `other` lies on
    /// this plane, is skipped.
    ///
    /// Returns `None` when the planes are parallel, or when the edges of
    /// `other` yield only one distinct crossing (a vertex on this plane with
    /// the opposite edge parallel to it).
    ///
    /// # Examples
    /// ```
    /// use cad_kernel::{Plane, Point};
    ///
    /// let ground = Plane::new(Point::ZERO, Point::new(1.0, 0.0, 0.0), Point::new(0.0, 1.0, 0.0));
    /// let slope = Plane::new(Point::ZERO, Point::new(1.0, 0.0, 1.0), Point::new(0.0, 1.0, -1.0));
    /// let (a, b) = ground.intersect_plane(&slope).unwrap();
    /// assert_eq!(a, Point::ZERO);
    /// assert_eq!(b, Point::new(0.5, 0.5, 0.0));
    /// ```
    pub fn intersect_plane(&self, other: &Plane) -> Option<(Point, Point)> {
        let edges = [(other.p0, other.p1), (other.p0, other.p2), (other.p1, other.p2)];
        let mut crossings = edges
            .into_iter()
            .filter_map(|(start, end)| self.intersect_line(start, end));
        let first = crossings.next()?;
        let second = crossings.find(|&p| p != first)?;
        Some((first, second))
    }

    /// X and Y rotation, in radians, that tilts a level object so it sits
    /// flat on this plane.
    ///
    /// A level plane yields `(0, 0, 0)`. The Z component is always zero.
    ///
    /// # Errors
    /// [`KernelError::DegeneratePlane`] for collinear points, and
    /// [`KernelError::DegenerateGeometry`] when the normal lies along the X or
    /// Y axis so one tilt angle is undefined.
    pub fn rotation_off_z(&self) -> KernelResult<Point> {
        let norm = self.normal()?;
        let yz = norm.y.hypot(norm.z);
        let xz = norm.x.hypot(norm.z);
        if yz == 0.0 || xz == 0.0 {
            return Err(KernelError::degenerate(format!(
                "tilt is undefined for a plane with normal {norm}"
            )));
        }
        let x_angle = (norm.z / yz).clamp(-1.0, 1.0).acos();
        let y_angle = (norm.z / xz).clamp(-1.0, 1.0).acos();
        Ok(Point::new(x_angle, y_angle, 0.0))
    }
}
