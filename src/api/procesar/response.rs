// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Response types for POST /procesar

use serde::{Deserialize, Serialize};

use crate::pose::DiagnosisResult;

/// Successful mobility diagnosis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcesarResponse {
    /// Right elbow angle in degrees
    pub angulo_codo_derecho: f64,
    /// Left elbow angle in degrees
    pub angulo_codo_izquierdo: f64,
    /// Absolute difference between both angles
    pub diferencia_movilidad: f64,
    /// Localized diagnosis text
    pub diagnostico: String,
}

impl From<DiagnosisResult> for ProcesarResponse {
    fn from(result: DiagnosisResult) -> Self {
        Self {
            angulo_codo_derecho: result.right_elbow_angle,
            angulo_codo_izquierdo: result.left_elbow_angle,
            diferencia_movilidad: result.mobility_difference,
            diagnostico: result.label.message().to_string(),
        }
    }
}
