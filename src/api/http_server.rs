// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use std::time::Duration;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use super::handlers::HealthResponse;
use super::procesar::procesar_handler;
use crate::config::NodeConfig;
use crate::vision::{DetectorHandle, MAX_IMAGE_SIZE};

/// Room for multipart boundaries and part headers on top of the file itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded pose detector; `None` when the model failed to load
    pub detector: Option<DetectorHandle>,
    pub detector_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(detector: Option<DetectorHandle>, config: &NodeConfig) -> Self {
        Self {
            detector,
            detector_timeout: config.detector_timeout(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    /// State with no detector and default limits
    pub fn new_for_test() -> Self {
        Self {
            detector: None,
            detector_timeout: Duration::from_secs(30),
            max_upload_bytes: MAX_IMAGE_SIZE,
        }
    }

    pub fn with_detector(mut self, detector: DetectorHandle) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn with_detector_timeout(mut self, timeout: Duration) -> Self {
        self.detector_timeout = timeout;
        self
    }
}

/// Build the HTTP router
pub fn create_app(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/procesar", post(procesar_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let detector = state.detector.as_ref().map(|d| d.model_name().to_string());
    let status = if detector.is_some() {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        detector,
        version: crate::version::VERSION_NUMBER.to_string(),
    })
}

/// Bind and serve until Ctrl+C or SIGTERM
pub async fn start_server(config: &NodeConfig, state: AppState) -> Result<()> {
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("🌐 HTTP server listening on {}", addr);

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("⏹️  Shutdown signal received");
}
