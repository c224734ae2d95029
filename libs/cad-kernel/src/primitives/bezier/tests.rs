//! Tests for bezier sampling.

use approx::assert_relative_eq;

use super::*;

const P0: Point = Point::new(0.0, 0.0, 0.0);
const C0: Point = Point::new(0.0, 4.0, 0.0);
const C1: Point = Point::new(4.0, 4.0, 2.0);
const P1: Point = Point::new(4.0, 0.0, 2.0);

#[test]
fn two_samples_are_the_endpoints() {
    assert_eq!(bezier(2, P0, C0, C1, P1).unwrap(), vec![P0, P1]);
}

#[test]
fn endpoints_are_exact() {
    let curve = bezier(7, P0, C0, C1, P1).unwrap();
    assert_eq!(curve.len(), 7);
    assert_eq!(curve[0], P0);
    assert_eq!(curve[6], P1);
}

#[test]
fn midpoint_blends_all_four_points() {
    let curve = bezier(3, P0, C0, C1, P1).unwrap();
    // (P0 + 3 C0 + 3 C1 + P1) / 8
    assert_relative_eq!(curve[1].x, 2.0);
    assert_relative_eq!(curve[1].y, 3.0);
    assert_relative_eq!(curve[1].z, 1.0);
}

#[test]
fn straight_controls_give_evenly_spaced_points() {
    let end = Point::new(3.0, 0.0, 0.0);
    let curve = bezier(4, P0, Point::new(1.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0), end).unwrap();
    for (idx, p) in curve.iter().enumerate() {
        assert_relative_eq!(p.x, idx as f64, epsilon = 1e-12);
    }
}

#[test]
fn too_few_samples_are_rejected() {
    assert!(matches!(
        bezier(1, P0, C0, C1, P1),
        Err(KernelError::InvalidParameter { .. })
    ));
    assert!(bezier(0, P0, C0, C1, P1).is_err());
}
