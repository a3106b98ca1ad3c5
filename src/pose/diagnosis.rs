// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Bilateral mobility diagnosis from elbow joint angles

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::geometry::{joint_angle, GeometryError};
use super::landmarks::{LandmarkSet, Side};

/// Asymmetry (degrees) above which one side is considered restricted
pub const MOBILITY_THRESHOLD_DEGREES: f64 = 10.0;

/// Classification of left/right mobility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MobilityLabel {
    ReducedRight,
    ReducedLeft,
    Symmetric,
}

impl MobilityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MobilityLabel::ReducedRight => "reduced-right",
            MobilityLabel::ReducedLeft => "reduced-left",
            MobilityLabel::Symmetric => "symmetric",
        }
    }

    /// Client-facing diagnosis text
    pub fn message(&self) -> &'static str {
        match self {
            MobilityLabel::ReducedRight => "Movilidad reducida en el HOMBRO DERECHO",
            MobilityLabel::ReducedLeft => "Movilidad reducida en el HOMBRO IZQUIERDO",
            MobilityLabel::Symmetric => "Rango de movimiento similar en ambos hombros",
        }
    }
}

/// Result of comparing both elbow angles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub right_elbow_angle: f64,
    pub left_elbow_angle: f64,
    /// Always `|right_elbow_angle - left_elbow_angle|`
    pub mobility_difference: f64,
    pub label: MobilityLabel,
}

/// Diagnose with the standard 10 degree threshold
pub fn diagnose(right_angle: f64, left_angle: f64) -> DiagnosisResult {
    diagnose_with_threshold(right_angle, left_angle, MOBILITY_THRESHOLD_DEGREES)
}

/// Diagnose mobility asymmetry
///
/// A difference strictly greater than `threshold` marks the side with the
/// smaller angle as restricted; a difference equal to the threshold is
/// symmetric.
pub fn diagnose_with_threshold(right_angle: f64, left_angle: f64, threshold: f64) -> DiagnosisResult {
    let mobility_difference = (right_angle - left_angle).abs();

    let label = if mobility_difference > threshold {
        if right_angle < left_angle {
            MobilityLabel::ReducedRight
        } else {
            MobilityLabel::ReducedLeft
        }
    } else {
        MobilityLabel::Symmetric
    };

    DiagnosisResult {
        right_elbow_angle: right_angle,
        left_elbow_angle: left_angle,
        mobility_difference,
        label,
    }
}

/// Measure both elbows and diagnose
///
/// # Errors
/// Propagates `GeometryError` when either arm's landmarks are degenerate.
pub fn assess_pose(landmarks: &LandmarkSet) -> Result<DiagnosisResult, GeometryError> {
    let right = elbow_angle(landmarks, Side::Right)?;
    let left = elbow_angle(landmarks, Side::Left)?;

    let result = diagnose(right, left);
    debug!(
        "Elbow angles: right={:.2}, left={:.2}, diff={:.2} -> {}",
        right,
        left,
        result.mobility_difference,
        result.label.as_str()
    );

    Ok(result)
}

fn elbow_angle(landmarks: &LandmarkSet, side: Side) -> Result<f64, GeometryError> {
    let arm = landmarks.arm(side);
    joint_angle(arm.shoulder, arm.elbow, arm.wrist)
}
