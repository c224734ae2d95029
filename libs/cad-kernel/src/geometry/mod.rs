//! Analytic geometry over [`Point`](crate::Point) and
//! [`Point2D`](crate::Point2D).
//!
//! Parallel lines and planes are expected outcomes and come back as `None`;
//! degenerate definitions (collinear plane points, vertical slope) are errors.

pub mod line2d;
pub mod plane;

pub use line2d::Line2D;
pub use plane::Plane;
