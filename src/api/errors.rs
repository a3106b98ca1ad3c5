// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pose::GeometryError;
use crate::vision::{DetectError, ImageError};

/// Error body returned to clients: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Terminal failures of a `/procesar` request
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("No se recibió ningún archivo")]
    NoFileProvided,

    #[error("Nombre de archivo vacío")]
    EmptyFilename,

    #[error("Formulario multipart inválido: {0}")]
    InvalidMultipart(String),

    #[error("No se pudo decodificar la imagen")]
    DecodeFailure(#[source] ImageError),

    #[error("No se detectó la postura")]
    PoseNotDetected,

    #[error("La detección de postura excedió el tiempo límite")]
    DetectorTimeout,

    #[error("Error al procesar la imagen")]
    DetectorFailure(String),

    #[error("Servicio de detección de postura no disponible")]
    DetectorUnavailable,
}

impl ProcessError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProcessError::NoFileProvided
            | ProcessError::EmptyFilename
            | ProcessError::InvalidMultipart(_)
            | ProcessError::DecodeFailure(_)
            | ProcessError::PoseNotDetected => StatusCode::BAD_REQUEST,
            ProcessError::DetectorTimeout => StatusCode::GATEWAY_TIMEOUT,
            ProcessError::DetectorFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProcessError::DetectorUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

impl From<ImageError> for ProcessError {
    fn from(err: ImageError) -> Self {
        ProcessError::DecodeFailure(err)
    }
}

impl From<DetectError> for ProcessError {
    fn from(err: DetectError) -> Self {
        match err {
            DetectError::Timeout(_) => ProcessError::DetectorTimeout,
            DetectError::Inference(msg) => ProcessError::DetectorFailure(msg),
            DetectError::Unavailable(_) => ProcessError::DetectorUnavailable,
        }
    }
}

/// Degenerate arm geometry is indistinguishable from an unusable pose
impl From<GeometryError> for ProcessError {
    fn from(_: GeometryError) -> Self {
        ProcessError::PoseNotDetected
    }
}

impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_response())).into_response()
    }
}
