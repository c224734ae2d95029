//! Tests for the shared generator parameters.

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn height_conversions() {
    assert_eq!(Height::from(4.0).bounds(), (-2.0, 2.0));
    assert_eq!(Height::from((1.0, 3.0)).bounds(), (1.0, 3.0));
}

#[test]
fn empty_heights_are_rejected() {
    assert!(Height::Centered(0.0).validated_bounds().is_err());
    assert!(Height::Span(3.0, 1.0).validated_bounds().is_err());
    assert!(Height::Centered(f64::NAN).validated_bounds().is_err());
}

#[test]
fn default_sweep_is_closed() {
    let sweep = Sweep::default();
    assert_eq!(sweep.segments, 24);
    assert!(sweep.is_closed());
    assert_eq!(sweep.rim().unwrap().len(), 24);
}

#[test]
fn open_rim_includes_both_ends() {
    let rim = Sweep::new(2, 90.0).rim().unwrap();
    assert_eq!(rim.len(), 3);
    assert_abs_diff_eq!(rim[0].0, 0.0);
    assert_abs_diff_eq!(rim[0].1, 1.0);
    assert_abs_diff_eq!(rim[2].0, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(rim[2].1, 0.0, epsilon = 1e-12);
}

#[test]
fn oversized_rotation_is_clamped() {
    let rim = Sweep::new(4, 720.0).rim().unwrap();
    assert_eq!(rim.len(), 4);
    // quarter turns, not half turns
    assert_abs_diff_eq!(rim[1].0, 1.0, epsilon = 1e-12);
}

#[test]
fn degenerate_sweeps_are_rejected() {
    assert!(Sweep::full(2).rim().is_err());
    assert!(Sweep::new(0, 90.0).rim().is_err());
    assert!(Sweep::new(1, 90.0).rim().is_ok());
    assert!(Sweep::new(8, 0.0).rim().is_err());
    assert!(Sweep::new(8, -30.0).rim().is_err());
}

#[test]
fn positive_accepts_only_positive() {
    assert_eq!(positive("r", 2.0), Ok(2.0));
    assert!(positive("r", 0.0).is_err());
    assert!(positive("r", f64::NAN).is_err());
}
