// Version information for the Shoulder Mobility Node

/// Full version string with feature description
pub const VERSION: &str = "v1.0.0-shoulder-mobility-2026-10-19";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.0.0";

/// Major version number
pub const VERSION_MAJOR: u32 = 1;

/// Minor version number
pub const VERSION_MINOR: u32 = 0;

/// Patch version number
pub const VERSION_PATCH: u32 = 0;

/// Build date
pub const BUILD_DATE: &str = "2026-10-19";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "elbow-angles",
    "mobility-diagnosis",
    "multipart-upload",
    "onnx-pose-movenet",
    "onnx-pose-blazepose",
    "health-endpoint",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Shoulder Mobility Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "version": VERSION_NUMBER,
        "build": VERSION,
        "date": BUILD_DATE,
        "features": FEATURES,
    })
}
