// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod pose;
pub mod version;
pub mod vision;

pub use api::{create_app, start_server, AppState, ProcesarResponse, ProcessError};
pub use config::NodeConfig;
pub use pose::{assess_pose, diagnose, extract_landmarks, joint_angle, DiagnosisResult, MobilityLabel};
pub use vision::{DetectorHandle, OnnxPoseModel, PoseDetector};
