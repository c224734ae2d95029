//! Tests for the cylinder generator.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use super::*;
use crate::error::KernelError;
use crate::mesh::Face;
use crate::primitives::signed_volume;

#[test]
fn test_cylinder_closed_counts() {
    let c = cylinder(1.0, 2.0, None, Sweep::full(4)).expect("cylinder succeeds");
    // 4 top + 4 bottom + 2 centers
    assert_eq!(c.point_count(), 10);
    // 4 side quads + 4 top tris + 4 bottom tris
    assert_eq!(c.face_count(), 12);
    let quads = c.faces().iter().filter(|f| matches!(f, Face::Quad(_))).count();
    assert_eq!(quads, 4);
    c.validate().expect("dense indices");
}

#[test]
fn test_cylinder_default_sweep() {
    let c = cylinder(1.0, 1.0, None, Sweep::default()).unwrap();
    assert_eq!(c.point_count(), 24 * 2 + 2);
    assert_eq!(c.face_count(), 24 * 3);
}

#[test]
fn test_cylinder_rim_starts_at_plus_y() {
    let c = cylinder(3.0, 2.0, Some(1.0), Sweep::full(4)).unwrap();
    let points: Vec<_> = c.all_points().collect();
    // creation order: top center, bottom center, then top/bottom pairs
    assert_eq!(points[0], crate::Point::new(0.0, 0.0, 1.0));
    assert_eq!(points[1], crate::Point::new(0.0, 0.0, -1.0));
    assert_eq!(points[2], crate::Point::new(0.0, 3.0, 1.0));
    assert_eq!(points[3], crate::Point::new(0.0, 1.0, -1.0));
    // a quarter turn lands on +X
    assert_abs_diff_eq!(points[4].x, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[4].y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_cylinder_span_height() {
    let c = cylinder(1.0, (2.0, 7.0), None, Sweep::full(8)).unwrap();
    let (min, max) = c.bounding_box().unwrap();
    assert_eq!(min.z, 2.0);
    assert_eq!(max.z, 7.0);
}

#[test]
fn test_cylinder_winds_outward() {
    // a square prism inscribed in the unit circle has area 2
    let c = cylinder(1.0, 3.0, None, Sweep::full(4)).unwrap();
    assert_relative_eq!(signed_volume(&c), 6.0, epsilon = 1e-9);
}

#[test]
fn test_open_cylinder_counts_and_winding() {
    let c = cylinder(1.0, 2.0, None, Sweep::new(2, 180.0)).unwrap();
    // 3 top + 3 bottom + 2 centers
    assert_eq!(c.point_count(), 8);
    // 2 segments of 3 faces + 2 flat end quads
    assert_eq!(c.face_count(), 8);
    // two right triangles of legs 1 and 1, times height 2
    assert_relative_eq!(signed_volume(&c), 2.0, epsilon = 1e-9);
}

#[test]
fn test_full_rotation_is_clamped() {
    let a = cylinder(1.0, 2.0, None, Sweep::new(6, 400.0)).unwrap();
    let b = cylinder(1.0, 2.0, None, Sweep::full(6)).unwrap();
    assert_eq!(a.to_data(), b.to_data());
}

#[test]
fn test_cylinder_rejects_bad_parameters() {
    assert!(matches!(
        cylinder(0.0, 2.0, None, Sweep::full(8)),
        Err(KernelError::InvalidParameter { .. })
    ));
    assert!(cylinder(1.0, 2.0, Some(-1.0), Sweep::full(8)).is_err());
    assert!(cylinder(1.0, (3.0, 1.0), None, Sweep::full(8)).is_err());
    assert!(cylinder(1.0, 2.0, None, Sweep::full(2)).is_err());
}
