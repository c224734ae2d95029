//! Composable affine transforms.
//!
//! A [`Transform`] wraps a 4×4 matrix (3×3 rotation/scale block, translation
//! column, homogeneous row `[0, 0, 0, 1]`). Combinators never mutate: each
//! returns a new transform in which the added operation is applied to points
//! *before* everything accumulated so far, i.e. in the caller's local frame.
//!
//! ```text
//! Transform::new().translate(..).rotate_degrees(..)
//!     apply(p) == translate(rotate(p))
//! ```

use std::fmt;

use glam::{DMat4, DVec3, DVec4};

use crate::core::Point;

/// An affine transform built from translations, rotations and mirrors.
///
/// # Examples
/// ```
/// use cad_kernel::{Point, Transform};
///
/// let tf = Transform::new().translate(1.0, 0.0, 0.0).rotate_degrees(0.0, 0.0, 90.0);
/// assert_eq!(tf.apply(Point::new(1.0, 0.0, 0.0)), Point::new(1.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(DMat4);

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Creates the identity transform.
    pub fn new() -> Self {
        Self(DMat4::IDENTITY)
    }

    /// Wraps an existing affine matrix.
    pub fn from_matrix(matrix: DMat4) -> Self {
        Self(matrix)
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> DMat4 {
        self.0
    }

    /// The matrix in row-major order, as consumed by hosts that apply the
    /// transform to realized objects.
    pub fn rows(&self) -> [[f64; 4]; 4] {
        self.0.transpose().to_cols_array_2d()
    }

    /// The translation column as a point.
    pub fn point(&self) -> Point {
        Point::from(self.0.w_axis.truncate())
    }

    /// Applies this transform to a point, treated as a homogeneous vector
    /// with `w = 1`. The resulting `w` is dropped.
    pub fn apply(&self, point: Point) -> Point {
        let v = self.0 * DVec4::new(point.x, point.y, point.z, 1.0);
        Point::from(v.truncate())
    }

    /// Composes `other` into this transform so that `other` is applied to
    /// points first.
    pub fn transform(&self, other: &Transform) -> Transform {
        self.compose(other.0)
    }

    /// Adds a translation.
    pub fn translate(&self, x: f64, y: f64, z: f64) -> Transform {
        self.compose(DMat4::from_translation(DVec3::new(x, y, z)))
    }

    /// Adds a rotation given in degrees. Alias of [`Transform::rotate_degrees`].
    pub fn rotate(&self, x: f64, y: f64, z: f64) -> Transform {
        self.rotate_degrees(x, y, z)
    }

    /// Adds an XYZ Euler rotation given in degrees.
    pub fn rotate_degrees(&self, x: f64, y: f64, z: f64) -> Transform {
        self.rotate_radians(x.to_radians(), y.to_radians(), z.to_radians())
    }

    /// Adds an XYZ Euler rotation given in radians: about X, then Y, then Z.
    pub fn rotate_radians(&self, x: f64, y: f64, z: f64) -> Transform {
        let rot = DMat4::from_rotation_z(z) * DMat4::from_rotation_y(y) * DMat4::from_rotation_x(x);
        self.compose(rot)
    }

    /// Adds a mirror across the YZ plane (negates X).
    pub fn mirror_x(&self) -> Transform {
        self.compose(DMat4::from_scale(DVec3::new(-1.0, 1.0, 1.0)))
    }

    /// Adds a mirror across the XZ plane (negates Y).
    pub fn mirror_y(&self) -> Transform {
        self.compose(DMat4::from_scale(DVec3::new(1.0, -1.0, 1.0)))
    }

    /// Adds a mirror across the XY plane (negates Z).
    pub fn mirror_z(&self) -> Transform {
        self.compose(DMat4::from_scale(DVec3::new(1.0, 1.0, -1.0)))
    }

    /// Placement that seats an object on the wall running from `left` to
    /// `right`.
    ///
    /// The object is expected to be centered on the X axis with its face on
    /// the Y axis. It is shifted along X by `x` plus half the wall length and
    /// along Z by `z`, turned to the wall's angle about Z, then moved to
    /// `left` (Z of the wall endpoints is ignored).
    pub fn onto_wall(left: Point, right: Point, x: f64, z: f64) -> Transform {
        let dx = right.x - left.x;
        let dy = right.y - left.y;
        let wall_len = (dx * dx + dy * dy).sqrt();
        let angle = dy.atan2(dx);

        Transform::new()
            .translate(left.x, left.y, 0.0)
            .rotate_radians(0.0, 0.0, angle)
            .translate(x + wall_len * 0.5, 0.0, z)
    }

    fn compose(&self, op: DMat4) -> Transform {
        Transform(self.0 * op)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}, {}, {}, {}]", row[0], row[1], row[2], row[3])?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests;
