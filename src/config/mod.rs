// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration from command line flags and environment variables

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::vision::pose_model::{PoseModelLayout, DEFAULT_INPUT_SIZE, DEFAULT_MIN_POSE_SCORE};
use crate::vision::MAX_IMAGE_SIZE;

/// Shoulder mobility node
#[derive(Parser, Debug, Clone)]
#[command(name = "shoulder-mobility-node")]
#[command(version)]
#[command(about = "HTTP service that diagnoses shoulder mobility asymmetry from a photo", long_about = None)]
pub struct NodeConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Bind address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Path to the ONNX pose landmark model
    #[arg(
        long,
        env = "POSE_MODEL_PATH",
        default_value = "./models/pose/movenet-singlepose-lightning.onnx"
    )]
    pub pose_model_path: PathBuf,

    /// Output layout of the pose model
    #[arg(long, env = "POSE_MODEL_LAYOUT", value_enum, default_value_t = PoseModelLayout::MoveNet)]
    pub pose_model_layout: PoseModelLayout,

    /// Square input size expected by the pose model
    #[arg(long, env = "POSE_INPUT_SIZE", default_value_t = DEFAULT_INPUT_SIZE)]
    pub pose_input_size: u32,

    /// Mean landmark score below which no pose is reported
    #[arg(long, env = "MIN_POSE_SCORE", default_value_t = DEFAULT_MIN_POSE_SCORE)]
    pub min_pose_score: f32,

    /// Upper bound on a single pose detection, in seconds
    #[arg(long, env = "DETECTOR_TIMEOUT_SECS", default_value_t = 30)]
    pub detector_timeout_secs: u64,

    /// Maximum accepted upload size in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = MAX_IMAGE_SIZE)]
    pub max_upload_bytes: usize,
}

impl NodeConfig {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn detector_timeout(&self) -> Duration {
        Duration::from_secs(self.detector_timeout_secs)
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: IpAddr::from([0, 0, 0, 0]),
            pose_model_path: PathBuf::from("./models/pose/movenet-singlepose-lightning.onnx"),
            pose_model_layout: PoseModelLayout::MoveNet,
            pose_input_size: DEFAULT_INPUT_SIZE,
            min_pose_score: DEFAULT_MIN_POSE_SCORE,
            detector_timeout_secs: 30,
            max_upload_bytes: MAX_IMAGE_SIZE,
        }
    }
}
