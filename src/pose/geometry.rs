// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Planar geometry for joint angle measurement

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when an angle cannot be measured
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// One of the rays leaving the vertex has zero length
    #[error("Degenerate geometry: a ray from the vertex {vertex:?} has zero length")]
    Degenerate { vertex: Point2D },

    /// A coordinate is NaN or infinite
    #[error("Non-finite coordinate in angle input")]
    NonFinite,
}

/// A 2D point in normalized image coordinates
///
/// Coordinates are conventionally in [0, 1] but any real value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `other` to `self`
    pub fn sub(self, other: Point2D) -> Point2D {
        Point2D::new(self.x - other.x, self.y - other.y)
    }

    pub fn dot(self, other: Point2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length when treated as a vector
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

/// Angle at vertex `b` formed by the rays `b→a` and `b→c`, in degrees
///
/// The result is always within [0, 180]. The cosine is clamped to [-1, 1]
/// before `acos` so rounding drift on nearly collinear points cannot leave
/// the inverse-cosine domain.
///
/// # Errors
/// - `GeometryError::Degenerate` if `a` or `c` coincides with `b`
/// - `GeometryError::NonFinite` if any coordinate is NaN or infinite
pub fn joint_angle(a: Point2D, b: Point2D, c: Point2D) -> Result<f64, GeometryError> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(GeometryError::NonFinite);
    }

    let ba = a.sub(b);
    let bc = c.sub(b);

    let norms = ba.norm() * bc.norm();
    if norms == 0.0 {
        return Err(GeometryError::Degenerate { vertex: b });
    }

    let cos_theta = (ba.dot(bc) / norms).clamp(-1.0, 1.0);
    Ok(cos_theta.acos().to_degrees())
}
