// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pose detector contract and the shared, serialized detector handle

use image::DynamicImage;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::pose::DetectedPose;

/// A pose landmark detector
///
/// Implementations are only required to be `Send`; `DetectorHandle` takes
/// care of serializing calls across concurrent requests.
pub trait PoseDetector: Send {
    /// Detect the single most prominent pose in `image`
    ///
    /// Returns `Ok(None)` when no person is found.
    fn detect(&mut self, image: &DynamicImage) -> anyhow::Result<Option<DetectedPose>>;

    /// Name reported by the health endpoint
    fn model_name(&self) -> String;
}

/// Errors from a detection call made through `DetectorHandle`
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Pose detection timed out after {0:?}")]
    Timeout(Duration),

    #[error("Pose detection failed: {0}")]
    Inference(String),

    #[error("Pose detector unavailable: {0}")]
    Unavailable(String),
}

/// Long-lived handle to the process-wide pose detector
///
/// Built once at startup and cloned into request handlers. Each detection
/// holds the lock for its duration, so a detector is never entered by two
/// requests at once.
#[derive(Clone)]
pub struct DetectorHandle {
    inner: Arc<Mutex<Box<dyn PoseDetector>>>,
    model_name: String,
}

impl std::fmt::Debug for DetectorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorHandle")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl DetectorHandle {
    pub fn new<D: PoseDetector + 'static>(detector: D) -> Self {
        Self::from_boxed(Box::new(detector))
    }

    pub fn from_boxed(detector: Box<dyn PoseDetector>) -> Self {
        let model_name = detector.model_name();
        Self {
            inner: Arc::new(Mutex::new(detector)),
            model_name,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Run detection on a blocking worker, bounded by `timeout`
    ///
    /// On timeout the worker keeps running to completion and still holds the
    /// lock until it finishes; the caller gets `DetectError::Timeout`
    /// immediately.
    pub async fn detect(
        &self,
        image: DynamicImage,
        timeout: Duration,
    ) -> Result<Option<DetectedPose>, DetectError> {
        let inner = self.inner.clone();

        let task = tokio::task::spawn_blocking(move || {
            let mut detector = inner
                .lock()
                .map_err(|_| DetectError::Unavailable("detector lock poisoned".to_string()))?;
            detector
                .detect(&image)
                .map_err(|e| DetectError::Inference(format!("{:#}", e)))
        });

        match tokio::time::timeout(timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => {
                warn!("Pose detection worker failed: {}", join_error);
                Err(DetectError::Unavailable(join_error.to_string()))
            }
            Err(_) => Err(DetectError::Timeout(timeout)),
        }
    }
}
