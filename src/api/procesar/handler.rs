// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Mobility diagnosis endpoint handler

use axum::{extract::State, Json};
use axum_extra::extract::multipart::MultipartRejection;
use axum_extra::extract::Multipart;
use tracing::{debug, info, warn};

use super::response::ProcesarResponse;
use super::upload::read_first_file;
use crate::api::errors::ProcessError;
use crate::api::http_server::AppState;
use crate::pose::{assess_pose, extract_landmarks};
use crate::vision::image_utils::format_to_extension;
use crate::vision::{decode_image_bytes_with_limit, ImageError};

/// POST /procesar - Diagnose shoulder mobility from a photo
///
/// Accepts a multipart form with one image file under any field name. A body
/// that is not multipart at all carries no file and is answered as such.
/// Each step is terminal on failure; nothing is retried.
///
/// # Response
/// - `angulo_codo_derecho`: Right elbow angle (degrees)
/// - `angulo_codo_izquierdo`: Left elbow angle (degrees)
/// - `diferencia_movilidad`: Absolute angle difference
/// - `diagnostico`: Localized diagnosis text
///
/// # Errors
/// - 400 Bad Request: No file, empty filename, undecodable image, no pose
/// - 503 Service Unavailable: Pose detector not loaded
/// - 504 Gateway Timeout: Pose detection exceeded the configured timeout
/// - 500 Internal Server Error: Pose detector failed
pub async fn procesar_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcesarResponse>, ProcessError> {
    info!("🔹 Receiving request...");

    // 1. Receive
    let mut multipart = multipart.map_err(|rejection| {
        warn!("⚠️ Request is not a multipart upload: {}", rejection);
        ProcessError::NoFileProvided
    })?;
    let upload = read_first_file(&mut multipart).await?;

    // 2. Decode
    let max_size = state.max_upload_bytes;
    let bytes = upload.bytes;
    let (image, image_info) = tokio::task::spawn_blocking(move || {
        decode_image_bytes_with_limit(&bytes, max_size)
    })
    .await
    .map_err(|e| ImageError::DecodeFailed(e.to_string()))?
    .map_err(|e| {
        warn!("Failed to decode image '{}': {}", upload.file_name, e);
        ProcessError::from(e)
    })?;

    debug!(
        "Decoded {} image: {}x{}, {} bytes",
        format_to_extension(image_info.format),
        image_info.width,
        image_info.height,
        image_info.size_bytes
    );

    // 3. Detect
    let detector = state.detector.as_ref().ok_or_else(|| {
        warn!("Pose detector not available");
        ProcessError::DetectorUnavailable
    })?;

    let detected = detector
        .detect(image, state.detector_timeout)
        .await
        .map_err(|e| {
            warn!("Pose detection failed: {}", e);
            ProcessError::from(e)
        })?;

    // 4. Extract
    let landmarks = extract_landmarks(detected.as_ref()).ok_or_else(|| {
        warn!("⚠️ No pose detected in the image");
        ProcessError::PoseNotDetected
    })?;

    // 5-6. Measure and diagnose
    let diagnosis = assess_pose(&landmarks).map_err(|e| {
        warn!("⚠️ Unusable arm landmarks: {}", e);
        ProcessError::from(e)
    })?;

    info!(
        "✅ Data processed: right={:.1}°, left={:.1}°, diff={:.1}° ({})",
        diagnosis.right_elbow_angle,
        diagnosis.left_elbow_angle,
        diagnosis.mobility_difference,
        diagnosis.label.as_str()
    );

    // 7. Respond
    Ok(Json(ProcesarResponse::from(diagnosis)))
}
