//! Version label endpoints.
//!
//! - `GET  /version`        - current label plus firmware checksum
//! - `POST /update_version` - overwrite the label
//!
//! The label and the image are independent files; nothing verifies that the
//! stored label describes the image currently on disk.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::checksum;
use crate::AppState;

/// JSON response for `GET /version`.
#[derive(Serialize)]
pub struct VersionResponse {
    /// Version label, trimmed of surrounding whitespace.
    pub version: String,
    /// Lowercase hex SHA-256 of the firmware image.
    pub checksum: String,
}

/// `GET /version` - report the stored version label and firmware checksum.
///
/// The label is checked first; the checksum is only computed once the label
/// has been read successfully.
///
/// # Error responses
///
/// - `404 {"error": "Version file not found"}` - label missing or unreadable
/// - `404 {"error": "Firmware file not found"}` - image missing or unreadable
pub async fn get_version(
    State(state): State<AppState>,
) -> Result<Json<VersionResponse>, (StatusCode, Json<Value>)> {
    let storage = &state.config.storage;

    let version = tokio::fs::read_to_string(&storage.version_file)
        .await
        .map_err(|_| {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Version file not found"})),
            )
        })?;

    let checksum = checksum::hash_file(&storage.firmware_file)
        .await
        .map_err(|_| {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Firmware file not found"})),
            )
        })?;

    Ok(Json(VersionResponse {
        version: version.trim().to_string(),
        checksum,
    }))
}

/// `POST /update_version` - durably overwrite the version label.
///
/// The body must be a JSON object with string values carrying a `version`
/// key; extra keys are ignored. The value is stored exactly as provided,
/// untrimmed; `GET /version` trims on the way out.
///
/// # Error responses
///
/// - `400 {"error": "Invalid JSON body"}` - body is not such an object
/// - `400 {"error": "Version not provided"}` - `version` key missing
/// - `500 {"error": "Failed to update version"}` - write failure
pub async fn update_version(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let payload: HashMap<String, String> = serde_json::from_slice(&body).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid JSON body"})),
        )
    })?;

    let new_version = payload.get("version").ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Version not provided"})),
        )
    })?;

    tokio::fs::write(&state.config.storage.version_file, new_version)
        .await
        .map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to update version"})),
            )
        })?;

    Ok(Json(json!({"message": "Version updated successfully"})))
}
