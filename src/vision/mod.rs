// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision collaborators for the mobility endpoint
//!
//! This module provides:
//! - Image decoding for uploaded photos
//! - The pose detector contract and its shared handle
//! - An ONNX Runtime pose landmark model (CPU only)

pub mod detector;
pub mod image_utils;
pub mod pose_model;

pub use detector::{DetectError, DetectorHandle, PoseDetector};
pub use image_utils::{
    decode_image_bytes_with_limit, detect_format, ImageError, ImageInfo, MAX_IMAGE_SIZE,
};
pub use pose_model::{OnnxPoseModel, PoseModelLayout};
