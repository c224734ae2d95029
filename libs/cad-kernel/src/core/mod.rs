//! Core value types for the kernel.
//!
//! Includes the 3D `Point` and 2D `Point2D` position/vector types that every
//! other module builds on.

pub mod point;
pub mod point2d;

pub use point::Point;
pub use point2d::Point2D;

/// Hashable bit pattern of a coordinate, folding `-0.0` onto `0.0` so that
/// hashing agrees with `==`.
pub(crate) fn coordinate_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}
