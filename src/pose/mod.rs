// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pose analysis: joint angles and shoulder mobility diagnosis
//!
//! Components:
//! - `geometry` - 2D points and the joint angle calculator
//! - `landmarks` - Body part enumeration and arm landmark extraction
//! - `diagnosis` - Left/right asymmetry classification

pub mod diagnosis;
pub mod geometry;
pub mod landmarks;

pub use diagnosis::{
    assess_pose, diagnose, diagnose_with_threshold, DiagnosisResult, MobilityLabel,
    MOBILITY_THRESHOLD_DEGREES,
};
pub use geometry::{joint_angle, GeometryError, Point2D};
pub use landmarks::{
    extract_landmarks, ArmLandmarks, BodyPart, DetectedPose, Landmark, LandmarkSet, Side,
    REQUIRED_PARTS,
};
