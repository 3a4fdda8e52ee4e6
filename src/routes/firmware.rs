//! Firmware image download endpoint.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;

use crate::AppState;

/// `GET /firmware` - stream the firmware image verbatim.
///
/// The image is read in chunks as the response body streams out, so large
/// images never sit fully in memory. Responds with a bare `404` when no
/// image is on disk.
pub async fn get_firmware(State(state): State<AppState>) -> Response {
    let path = &state.config.storage.firmware_file;

    let file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(_) => return StatusCode::NOT_FOUND.into_response(),
    };

    let size = file.metadata().await.ok().map(|m| m.len());

    let mut response = Response::new(Body::from_stream(ReaderStream::new(file)));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/octet-stream"),
    );
    if let Some(size) = size {
        if let Ok(value) = HeaderValue::from_str(&size.to_string()) {
            response.headers_mut().insert(header::CONTENT_LENGTH, value);
        }
    }
    response
}
