// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// GET /health body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` when a detector is loaded, `degraded` otherwise
    pub status: String,
    /// Name of the loaded pose model
    pub detector: Option<String>,
    pub version: String,
}
