//! Primitive geometry generators.
//!
//! Each generator builds a fresh [`Mesh`](crate::Mesh) whose faces wind
//! counter-clockwise when viewed from outside the solid. `bezier` is the
//! exception: it samples a curve and returns its points.
//!
//! Cylinders and cones share the [`Height`] and [`Sweep`] parameters:
//!
//! ```text
//!            +Y (angle 0)
//!             │
//!             │   sweep direction
//!             ●──────►
//!             │        ╲
//!   ──────────┼─────────●── +X (angle 90)
//! ```

pub mod bezier;
pub mod cone;
pub mod cube;
pub mod cylinder;
pub mod wedge;

pub use bezier::bezier;
pub use cone::cone;
pub use cube::{cube, range_cube};
pub use cylinder::cylinder;
pub use wedge::wedge;

use config::constants::{FULL_ROTATION_DEGREES, MIN_CLOSED_SEGMENTS};
use tracing::warn;

use crate::config::KernelConfig;
use crate::error::{KernelError, KernelResult};

/// Vertical extent of a cylinder or cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Height {
    /// Total height, centered on `z = 0`.
    Centered(f64),
    /// Explicit `(bottom_z, top_z)`.
    Span(f64, f64),
}

impl Height {
    /// `(bottom_z, top_z)` of this height.
    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            Height::Centered(h) => (-h * 0.5, h * 0.5),
            Height::Span(bottom, top) => (bottom, top),
        }
    }

    pub(crate) fn validated_bounds(&self) -> KernelResult<(f64, f64)> {
        let (bottom, top) = self.bounds();
        if !(top > bottom) {
            warn!(bottom, top, "rejected empty height");
            return Err(KernelError::invalid_parameter(format!(
                "height must span a positive extent, got {bottom}..{top}"
            )));
        }
        Ok((bottom, top))
    }
}

impl From<f64> for Height {
    fn from(h: f64) -> Self {
        Height::Centered(h)
    }
}

impl From<(f64, f64)> for Height {
    fn from((bottom, top): (f64, f64)) -> Self {
        Height::Span(bottom, top)
    }
}

/// Angular subdivision of a cylinder or cone.
///
/// `rotation` is in degrees. Sweeps of a full turn or more are closed; shorter
/// sweeps get flat end faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Number of angular segments.
    pub segments: u32,
    /// Swept angle in degrees.
    pub rotation: f64,
}

impl Default for Sweep {
    fn default() -> Self {
        KernelConfig::default().sweep()
    }
}

impl Sweep {
    /// A sweep over `rotation` degrees split into `segments`.
    pub const fn new(segments: u32, rotation: f64) -> Self {
        Self { segments, rotation }
    }

    /// A closed sweep split into `segments`.
    pub const fn full(segments: u32) -> Self {
        Self::new(segments, FULL_ROTATION_DEGREES)
    }

    /// True when the sweep wraps all the way around.
    pub fn is_closed(&self) -> bool {
        self.rotation >= FULL_ROTATION_DEGREES
    }

    /// Rim positions as `(x, y)` unit offsets, starting at +Y and turning
    /// toward +X.
    ///
    /// A closed sweep yields `segments` positions, an open one `segments + 1`.
    pub(crate) fn rim(&self) -> KernelResult<Vec<(f64, f64)>> {
        let closed = self.is_closed();
        let min_segments = if closed { MIN_CLOSED_SEGMENTS } else { 1 };
        if self.segments < min_segments {
            warn!(segments = self.segments, closed, "rejected sweep segment count");
            return Err(KernelError::invalid_parameter(format!(
                "sweep needs at least {min_segments} segments, got {}",
                self.segments
            )));
        }
        if !(self.rotation > 0.0) {
            warn!(rotation = self.rotation, "rejected sweep angle");
            return Err(KernelError::invalid_parameter(format!(
                "sweep angle must be positive, got {}",
                self.rotation
            )));
        }

        let rotation = self.rotation.min(FULL_ROTATION_DEGREES).to_radians();
        let step = rotation / self.segments as f64;
        let count = if closed { self.segments } else { self.segments + 1 };
        Ok((0..count).map(|n| (step * n as f64).sin_cos()).collect())
    }
}

pub(crate) fn positive(name: &str, value: f64) -> KernelResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        warn!(name, value, "rejected non-positive parameter");
        Err(KernelError::invalid_parameter(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

/// Signed volume of a closed mesh; positive when faces wind outward.
#[cfg(test)]
pub(crate) fn signed_volume(mesh: &crate::Mesh) -> f64 {
    let points: Vec<crate::Point> = mesh.points().collect();
    mesh.triangles()
        .iter()
        .map(|&[a, b, c]| {
            let (a, b, c) = (points[a as usize], points[b as usize], points[c as usize]);
            a.dot(b.cross(c)) / 6.0
        })
        .sum()
}

#[cfg(test)]
mod tests;
