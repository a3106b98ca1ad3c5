// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Single-person pose landmark model running on ONNX Runtime
//!
//! Components:
//! - `preprocessing` - Letterbox resize and NHWC tensor conversion
//! - `detection` - ONNX session wrapper and output decoding

pub mod detection;
pub mod preprocessing;

pub use detection::{decode_blazepose, decode_movenet, OnnxPoseModel, DEFAULT_MIN_POSE_SCORE};
pub use preprocessing::{preprocess_for_pose, PreprocessInfo, DEFAULT_INPUT_SIZE};

/// Output layout of the loaded pose model
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PoseModelLayout {
    /// MoveNet single-pose: 17 COCO keypoints as (y, x, score), normalized
    #[value(name = "movenet")]
    MoveNet,
    /// BlazePose landmarks: 33+ points as (x, y, z, visibility, presence)
    /// in input pixels
    #[value(name = "blazepose")]
    BlazePose,
}

impl PoseModelLayout {
    /// Factor applied to 0-255 pixel values before inference
    pub fn pixel_scale(self) -> f32 {
        match self {
            PoseModelLayout::MoveNet => 1.0,
            PoseModelLayout::BlazePose => 1.0 / 255.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PoseModelLayout::MoveNet => "movenet",
            PoseModelLayout::BlazePose => "blazepose",
        }
    }
}
