// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multipart upload extraction for POST /procesar

use axum::body::Bytes;
use axum_extra::extract::Multipart;
use tracing::{debug, info, warn};

use crate::api::errors::ProcessError;

/// The file part selected from a multipart upload
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Form field the file arrived under (any name is accepted)
    pub field_name: String,
    /// Client-supplied filename
    pub file_name: String,
    /// Raw file contents
    pub bytes: Bytes,
}

/// Take the first file part of the form, whatever its field name
///
/// Parts without a `filename` are plain form fields and are skipped.
///
/// # Errors
/// - `NoFileProvided` if the form carries no file part
/// - `EmptyFilename` if the first file part has an empty filename
/// - `InvalidMultipart` if the body cannot be parsed
pub async fn read_first_file(multipart: &mut Multipart) -> Result<UploadedFile, ProcessError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Failed to read multipart field: {}", e);
        ProcessError::InvalidMultipart(e.to_string())
    })? {
        let field_name = field.name().unwrap_or_default().to_string();

        let Some(file_name) = field.file_name().map(str::to_string) else {
            debug!("Skipping non-file form field '{}'", field_name);
            continue;
        };

        if file_name.is_empty() {
            warn!("⚠️ Uploaded file under key '{}' has no name", field_name);
            return Err(ProcessError::EmptyFilename);
        }

        let bytes = field.bytes().await.map_err(|e| {
            warn!("Failed to read uploaded file '{}': {}", file_name, e);
            ProcessError::InvalidMultipart(e.to_string())
        })?;

        info!(
            "✅ Image received with key: {}, name: {} ({} bytes)",
            field_name,
            file_name,
            bytes.len()
        );

        return Ok(UploadedFile {
            field_name,
            file_name,
            bytes,
        });
    }

    warn!("⚠️ No file received in the request");
    Err(ProcessError::NoFileProvided)
}
