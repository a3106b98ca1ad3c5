// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use shoulder_mobility_node::{
    api::{start_server, AppState},
    config::NodeConfig,
    vision::{DetectorHandle, OnnxPoseModel},
};
use std::env;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = NodeConfig::parse();

    println!("🚀 Starting Shoulder Mobility Node...\n");
    println!("📦 BUILD VERSION: {}", shoulder_mobility_node::version::VERSION);
    println!("📅 Build Date: {}", shoulder_mobility_node::version::BUILD_DATE);
    println!();

    // Load the pose model; the server still starts without it
    println!("🧍 Loading pose model from {}...", config.pose_model_path.display());
    let detector = match OnnxPoseModel::new(
        &config.pose_model_path,
        config.pose_model_layout,
        config.pose_input_size,
    ) {
        Ok(model) => {
            let model = model.with_min_pose_score(config.min_pose_score);
            let handle = DetectorHandle::new(model);
            info!("✅ Pose model loaded: {}", handle.model_name());
            Some(handle)
        }
        Err(e) => {
            warn!("⚠️ Failed to load pose model: {:#}", e);
            warn!("   /procesar will answer 503 until the model is available");
            None
        }
    };

    let state = AppState::new(detector, &config);

    println!("🌐 Listening on http://{}", config.listen_addr());
    println!("\nPress Ctrl+C to shutdown...");

    start_server(&config, state).await?;

    // The state (and the detector it owns) was dropped when the server stopped
    println!("\n⏹️  Pose detector released");
    println!("👋 Goodbye!");
    Ok(())
}
