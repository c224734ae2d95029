//! Tests for the box generators.

use approx::assert_relative_eq;

use super::*;
use crate::mesh::Face;
use crate::primitives::signed_volume;

#[test]
fn test_cube_has_8_points_and_6_quads() {
    let c = cube(2.0, 2.0, 2.0).unwrap();
    assert_eq!(c.point_count(), 8);
    assert_eq!(c.face_count(), 6);
    assert!(c.faces().iter().all(|f| matches!(f, Face::Quad(_))));
    c.validate().expect("dense indices");
}

#[test]
fn test_cube_corners_are_unit_signs() {
    let c = cube(2.0, 2.0, 2.0).unwrap();
    for p in c.points() {
        for v in [p.x, p.y, p.z] {
            assert!(v == 1.0 || v == -1.0, "unexpected coordinate {v}");
        }
    }
}

#[test]
fn test_cube_winds_outward() {
    let c = cube(2.0, 3.0, 4.0).unwrap();
    assert_relative_eq!(signed_volume(&c), 24.0, epsilon = 1e-9);
}

/// Every edge of a closed box is shared by exactly two faces.
#[test]
fn test_cube_is_closed() {
    let c = cube(1.0, 1.0, 1.0).unwrap();
    assert_eq!(c.edges().len(), 12);
}

#[test]
fn test_range_cube_bounds_and_volume() {
    let c = range_cube((0.0, 4.0), (-1.0, 1.0), (2.0, 3.0)).unwrap();
    let (min, max) = c.bounding_box().unwrap();
    assert_eq!(min, crate::Point::new(0.0, -1.0, 2.0));
    assert_eq!(max, crate::Point::new(4.0, 1.0, 3.0));
    assert_relative_eq!(signed_volume(&c), 8.0, epsilon = 1e-9);
}

#[test]
fn test_invalid_sizes_are_rejected() {
    assert!(matches!(cube(0.0, 1.0, 1.0), Err(KernelError::InvalidParameter { .. })));
    assert!(cube(1.0, -1.0, 1.0).is_err());
    assert!(range_cube((1.0, 0.0), (0.0, 1.0), (0.0, 1.0)).is_err());
    assert!(range_cube((0.0, 1.0), (0.0, 1.0), (2.0, 2.0)).is_err());
}
