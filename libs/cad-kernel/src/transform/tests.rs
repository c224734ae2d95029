//! Tests for transform composition.

use approx::assert_abs_diff_eq;

use super::*;

fn assert_point_eq(actual: Point, expected: Point) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-12);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-12);
    assert_abs_diff_eq!(actual.z, expected.z, epsilon = 1e-12);
}

#[test]
fn identity_leaves_points_alone() {
    let p = Point::new(1.0, -2.0, 3.5);
    assert_eq!(Transform::new().apply(p), p);
    assert_eq!(Transform::default(), Transform::new());
}

/// The most recently added operation happens first.
#[test]
fn translate_then_rotate_rotates_first() {
    let tf = Transform::new().translate(1.0, 0.0, 0.0).rotate_degrees(0.0, 0.0, 90.0);
    assert_eq!(tf.apply(Point::new(1.0, 0.0, 0.0)), Point::new(1.0, 1.0, 0.0));
}

#[test]
fn rotate_then_translate_translates_first() {
    let tf = Transform::new().rotate_degrees(0.0, 0.0, 90.0).translate(1.0, 0.0, 0.0);
    assert_point_eq(tf.apply(Point::new(1.0, 0.0, 0.0)), Point::new(0.0, 2.0, 0.0));
}

#[test]
fn euler_rotation_applies_x_before_z() {
    let tf = Transform::new().rotate_degrees(90.0, 0.0, 90.0);
    assert_point_eq(tf.apply(Point::new(0.0, 1.0, 0.0)), Point::new(0.0, 0.0, 1.0));
}

#[test]
fn rotate_about_y_is_right_handed() {
    let tf = Transform::new().rotate_degrees(0.0, 90.0, 0.0);
    assert_point_eq(tf.apply(Point::new(0.0, 0.0, 1.0)), Point::new(1.0, 0.0, 0.0));
}

#[test]
fn radians_and_degrees_agree() {
    let p = Point::new(1.0, 2.0, 3.0);
    let a = Transform::new().rotate_degrees(30.0, 45.0, 60.0).apply(p);
    let b = Transform::new()
        .rotate_radians(30f64.to_radians(), 45f64.to_radians(), 60f64.to_radians())
        .apply(p);
    assert_point_eq(a, b);
    assert_eq!(Transform::new().rotate(30.0, 45.0, 60.0), Transform::new().rotate_degrees(30.0, 45.0, 60.0));
}

#[test]
fn transform_composes_like_the_combinators() {
    let base = Transform::new().rotate_degrees(0.0, 0.0, 45.0);
    let step = Transform::new().translate(2.0, 0.0, 0.0);
    assert_eq!(base.transform(&step), base.translate(2.0, 0.0, 0.0));

    let p = Point::new(1.0, 1.0, 1.0);
    assert_point_eq(base.transform(&step).apply(p), base.apply(step.apply(p)));
}

#[test]
fn combinators_do_not_mutate() {
    let base = Transform::new().translate(1.0, 0.0, 0.0);
    let _moved = base.translate(5.0, 5.0, 5.0);
    assert_eq!(base.point(), Point::new(1.0, 0.0, 0.0));
}

#[test]
fn mirrors_negate_their_axis() {
    let p = Point::new(1.0, 2.0, 3.0);
    assert_eq!(Transform::new().mirror_x().apply(p), Point::new(-1.0, 2.0, 3.0));
    assert_eq!(Transform::new().mirror_y().apply(p), Point::new(1.0, -2.0, 3.0));
    assert_eq!(Transform::new().mirror_z().apply(p), Point::new(1.0, 2.0, -3.0));
}

#[test]
fn point_extracts_translation_column() {
    let tf = Transform::new().translate(1.0, 2.0, 3.0).translate(1.0, 1.0, 1.0);
    assert_eq!(tf.point(), Point::new(2.0, 3.0, 4.0));

    let rows = tf.rows();
    assert_eq!(rows[0][3], 2.0);
    assert_eq!(rows[1][3], 3.0);
    assert_eq!(rows[2][3], 4.0);
    assert_eq!(rows[3], [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn display_lists_rows() {
    assert_eq!(
        Transform::new().to_string(),
        "[[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]"
    );
}

#[test]
fn onto_wall_centers_object_on_wall() {
    let left = Point::new(2.0, 3.0, 0.0);
    let right = Point::new(2.0, 13.0, 0.0);
    let tf = Transform::onto_wall(left, right, 0.0, 1.0);
    assert_point_eq(tf.apply(Point::ZERO), Point::new(2.0, 8.0, 1.0));
    // the object's X axis now runs along the wall
    assert_point_eq(tf.apply(Point::new(1.0, 0.0, 0.0)), Point::new(2.0, 9.0, 1.0));
}
