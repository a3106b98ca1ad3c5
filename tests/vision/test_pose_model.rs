// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ONNX pose model tests
//!
//! Tests that need real weights are skipped when the model file is absent.
//! Download MoveNet SinglePose Lightning (ONNX, float32 input) to
//! `./models/pose/movenet-singlepose-lightning.onnx` to run them.

use image::{DynamicImage, RgbImage};
use shoulder_mobility_node::{
    pose::BodyPart,
    vision::{
        pose_model::{decode_movenet, PreprocessInfo},
        OnnxPoseModel, PoseDetector, PoseModelLayout,
    },
};
use std::io::Write;
use std::path::Path;

const MOVENET_MODEL_PATH: &str = "./models/pose/movenet-singlepose-lightning.onnx";

#[test]
fn test_missing_model_fails_to_load() {
    let result = OnnxPoseModel::new(
        "/nonexistent/pose.onnx",
        PoseModelLayout::MoveNet,
        192,
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("not found"), "{}", err);
}

#[test]
fn test_corrupt_model_fails_to_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"this is not an onnx graph").unwrap();

    let result = OnnxPoseModel::new(file.path(), PoseModelLayout::MoveNet, 192);
    assert!(result.is_err());
}

#[test]
fn test_zero_input_size_rejected() {
    let file = tempfile::NamedTempFile::new().unwrap();

    let result = OnnxPoseModel::new(file.path(), PoseModelLayout::BlazePose, 0);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("input size"), "{}", err);
}

#[test]
fn test_movenet_output_maps_to_original_image() {
    // 384x192 landscape photo letterboxed into a 192 square: scale 0.5,
    // content rows 48..144
    let image = DynamicImage::ImageRgb8(RgbImage::new(384, 192));
    let info = PreprocessInfo::new(&image, 192);

    let mut values = vec![0.0f32; 17 * 3];
    // Keypoint 6 is the right shoulder in COCO order
    values[6 * 3] = 0.5; // y
    values[6 * 3 + 1] = 0.25; // x
    values[6 * 3 + 2] = 0.9; // score

    let pose = decode_movenet(&values, &info).unwrap();
    let shoulder = pose.get(BodyPart::RightShoulder).unwrap();

    assert!((shoulder.x - 0.25).abs() < 1e-4);
    assert!((shoulder.y - 0.5).abs() < 1e-4);
    assert!((shoulder.visibility - 0.9).abs() < 1e-6);
    assert_eq!(pose.landmarks.len(), 17);
}

#[test]
fn test_movenet_runs_on_blank_image() {
    if !Path::new(MOVENET_MODEL_PATH).exists() {
        eprintln!("Skipping: model not found at {}", MOVENET_MODEL_PATH);
        return;
    }

    let mut model = OnnxPoseModel::new(MOVENET_MODEL_PATH, PoseModelLayout::MoveNet, 192)
        .expect("Failed to load MoveNet")
        .with_min_pose_score(0.3);
    let blank = DynamicImage::ImageRgb8(RgbImage::new(320, 240));

    let result = model.detect(&blank).expect("Inference failed");
    if let Some(pose) = result {
        assert!(pose.score >= 0.3);
        assert_eq!(pose.landmarks.len(), 17);
    }
    assert!(!model.model_name().is_empty());
}
