// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ONNX pose landmark detector
//!
//! Loads a single-person pose model and turns its raw output into a
//! `DetectedPose` keyed by `BodyPart`, with coordinates normalized to the
//! original (pre-letterbox) image.

use anyhow::{Context, Result};
use image::DynamicImage;
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use tracing::{debug, info};

use super::preprocessing::preprocess_for_pose;
use super::PoseModelLayout;
use crate::pose::{BodyPart, DetectedPose, Landmark};
use crate::vision::detector::PoseDetector;

/// Mean landmark score below which the image is treated as having no pose
pub const DEFAULT_MIN_POSE_SCORE: f32 = 0.25;

/// COCO keypoint order produced by MoveNet
const MOVENET_KEYPOINTS: [BodyPart; 17] = [
    BodyPart::Nose,
    BodyPart::LeftEye,
    BodyPart::RightEye,
    BodyPart::LeftEar,
    BodyPart::RightEar,
    BodyPart::LeftShoulder,
    BodyPart::RightShoulder,
    BodyPart::LeftElbow,
    BodyPart::RightElbow,
    BodyPart::LeftWrist,
    BodyPart::RightWrist,
    BodyPart::LeftHip,
    BodyPart::RightHip,
    BodyPart::LeftKnee,
    BodyPart::RightKnee,
    BodyPart::LeftAnkle,
    BodyPart::RightAnkle,
];

const MOVENET_VALUES_PER_KEYPOINT: usize = 3;
const BLAZEPOSE_VALUES_PER_LANDMARK: usize = 5;

/// ONNX Runtime pose model
///
/// Runs on CPU. Access is not internally synchronized; share it through a
/// `DetectorHandle`.
pub struct OnnxPoseModel {
    session: Session,
    /// Model input name
    input_name: String,
    layout: PoseModelLayout,
    input_size: u32,
    min_pose_score: f32,
    model_name: String,
}

impl std::fmt::Debug for OnnxPoseModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxPoseModel")
            .field("input_name", &self.input_name)
            .field("layout", &self.layout)
            .field("input_size", &self.input_size)
            .field("min_pose_score", &self.min_pose_score)
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl OnnxPoseModel {
    /// Load the pose model from an ONNX file
    ///
    /// # Errors
    /// Returns error if:
    /// - Model file not found
    /// - ONNX Runtime initialization fails
    pub fn new<P: AsRef<Path>>(model_path: P, layout: PoseModelLayout, input_size: u32) -> Result<Self> {
        let model_path = model_path.as_ref();

        if !model_path.exists() {
            anyhow::bail!("Pose model not found: {}", model_path.display());
        }

        if input_size == 0 {
            anyhow::bail!("Pose model input size must be positive");
        }

        info!(
            "Loading {} pose model from {}",
            layout.name(),
            model_path.display()
        );

        let session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(4)
            .context("Failed to set intra threads")?
            .commit_from_file(model_path)
            .context(format!(
                "Failed to load pose model from {}",
                model_path.display()
            ))?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .unwrap_or_else(|| "input".to_string());

        if let Some(input) = session.inputs.first() {
            debug!("Pose model input shape: {:?}", input.input_type);
        }

        let model_name = model_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| layout.name().to_string());

        info!("✅ Pose model '{}' loaded (CPU-only)", model_name);

        Ok(Self {
            session,
            input_name,
            layout,
            input_size,
            min_pose_score: DEFAULT_MIN_POSE_SCORE,
            model_name,
        })
    }

    /// Set the minimum mean landmark score for a pose to count as detected
    pub fn with_min_pose_score(mut self, score: f32) -> Self {
        self.min_pose_score = score.clamp(0.0, 1.0);
        self
    }

    pub fn min_pose_score(&self) -> f32 {
        self.min_pose_score
    }

    pub fn layout(&self) -> PoseModelLayout {
        self.layout
    }

    fn run(&mut self, image: &DynamicImage) -> Result<Option<DetectedPose>> {
        let (tensor, info) = preprocess_for_pose(image, self.input_size, self.layout);

        let input_value = Value::from_array(tensor).context("Failed to create input tensor")?;

        let outputs = self
            .session
            .run(ort::inputs![&self.input_name => input_value])
            .context("Pose inference failed")?;

        let output_tensor = outputs[0]
            .try_extract_array::<f32>()
            .context("Failed to extract output tensor")?;
        debug!("Pose output shape: {:?}", output_tensor.shape());

        let values: Vec<f32> = output_tensor.iter().copied().collect();

        let pose = match self.layout {
            PoseModelLayout::MoveNet => decode_movenet(&values, &info)?,
            PoseModelLayout::BlazePose => decode_blazepose(&values, &info)?,
        };

        if pose.score < self.min_pose_score {
            debug!(
                "Pose score {:.3} below threshold {:.3}, no pose",
                pose.score, self.min_pose_score
            );
            return Ok(None);
        }

        Ok(Some(pose))
    }
}

impl PoseDetector for OnnxPoseModel {
    fn detect(&mut self, image: &DynamicImage) -> Result<Option<DetectedPose>> {
        self.run(image)
    }

    fn model_name(&self) -> String {
        self.model_name.clone()
    }
}

/// Decode MoveNet output: 17 keypoints of (y, x, score), normalized to the
/// model input square
pub fn decode_movenet(
    values: &[f32],
    info: &super::PreprocessInfo,
) -> Result<DetectedPose> {
    let expected = MOVENET_KEYPOINTS.len() * MOVENET_VALUES_PER_KEYPOINT;
    if values.len() < expected {
        anyhow::bail!(
            "Unexpected MoveNet output: {} values, expected {}",
            values.len(),
            expected
        );
    }

    let size = info.target_size as f32;
    let mut pose = DetectedPose::default();
    let mut total_score = 0.0;

    for (part, chunk) in MOVENET_KEYPOINTS
        .iter()
        .zip(values.chunks_exact(MOVENET_VALUES_PER_KEYPOINT))
    {
        let (y, x, score) = (chunk[0], chunk[1], chunk[2]);
        let (nx, ny) = info.to_normalized(x * size, y * size);
        pose.landmarks
            .insert(*part, Landmark::new(nx, ny).with_visibility(score));
        total_score += score;
    }

    pose.score = total_score / MOVENET_KEYPOINTS.len() as f32;
    Ok(pose)
}

/// Decode BlazePose landmark output: (x, y, z, visibility, presence) per
/// landmark in input pixels, visibility as a logit
///
/// Only the first 33 landmarks are body landmarks; the rest are auxiliary.
pub fn decode_blazepose(
    values: &[f32],
    info: &super::PreprocessInfo,
) -> Result<DetectedPose> {
    let expected = BodyPart::COUNT * BLAZEPOSE_VALUES_PER_LANDMARK;
    if values.len() < expected {
        anyhow::bail!(
            "Unexpected BlazePose output: {} values, expected at least {}",
            values.len(),
            expected
        );
    }

    let size = info.target_size as f32;
    let mut pose = DetectedPose::default();
    let mut total_score = 0.0;

    for (part, chunk) in BodyPart::ALL
        .iter()
        .zip(values.chunks_exact(BLAZEPOSE_VALUES_PER_LANDMARK))
    {
        let (nx, ny) = info.to_normalized(chunk[0], chunk[1]);
        let visibility = sigmoid(chunk[3]);
        pose.landmarks.insert(
            *part,
            Landmark {
                x: nx,
                y: ny,
                z: chunk[2] / size,
                visibility,
            },
        );
        total_score += visibility;
    }

    pose.score = total_score / BodyPart::COUNT as f32;
    Ok(pose)
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
