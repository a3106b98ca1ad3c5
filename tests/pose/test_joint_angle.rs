// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use shoulder_mobility_node::pose::{joint_angle, GeometryError, Point2D};

fn p(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

#[test]
fn test_right_angle() {
    let angle = joint_angle(p(0.0, 1.0), p(0.0, 0.0), p(1.0, 0.0)).unwrap();
    assert!((angle - 90.0).abs() < 1e-9);
}

#[test]
fn test_angle_is_symmetric_in_endpoints() {
    let a = p(0.42, 0.31);
    let b = p(0.45, 0.52);
    let c = p(0.61, 0.66);
    let forward = joint_angle(a, b, c).unwrap();
    let backward = joint_angle(c, b, a).unwrap();
    assert!((forward - backward).abs() < 1e-9);
}

#[test]
fn test_angle_is_scale_invariant() {
    let small = joint_angle(p(0.0, 0.1), p(0.0, 0.0), p(0.1, 0.1)).unwrap();
    let large = joint_angle(p(0.0, 100.0), p(0.0, 0.0), p(100.0, 100.0)).unwrap();
    assert!((small - 45.0).abs() < 1e-9);
    assert!((small - large).abs() < 1e-9);
}

#[test]
fn test_angle_range() {
    let points = [
        (p(0.1, 0.2), p(0.5, 0.5), p(0.9, 0.2)),
        (p(0.5, 0.0), p(0.5, 0.5), p(0.5, 1.0)),
        (p(0.9, 0.9), p(0.5, 0.5), p(0.91, 0.9)),
    ];
    for (a, b, c) in points {
        let angle = joint_angle(a, b, c).unwrap();
        assert!((0.0..=180.0).contains(&angle), "angle {} out of range", angle);
    }
}

#[test]
fn test_coincident_points_are_rejected() {
    let result = joint_angle(p(0.5, 0.5), p(0.5, 0.5), p(0.7, 0.5));
    assert!(matches!(result, Err(GeometryError::Degenerate { .. })));
}

#[test]
fn test_non_finite_points_are_rejected() {
    let result = joint_angle(p(f64::INFINITY, 0.0), p(0.0, 0.0), p(1.0, 0.0));
    assert!(matches!(result, Err(GeometryError::NonFinite)));
}
