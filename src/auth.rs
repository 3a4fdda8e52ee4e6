//! Shared-token authorization.
//!
//! Protected endpoints require an `Authorization` header whose value is
//! byte-equal to the token loaded at startup. Clients send the raw token,
//! no scheme prefix.

use std::path::Path;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

/// Axum middleware that rejects requests whose `Authorization` header does
/// not match the configured token. The expected value is injected via the
/// [`AuthToken`] extension.
///
/// A missing header is compared as the empty string. When no token file was
/// found at startup the expected value is also empty, so every request
/// passes; that is the unprotected mode announced by the startup warning.
///
/// # Error responses
///
/// - `401 Unauthorized` - header missing or value mismatch
/// - `500 Internal Server Error` - [`AuthToken`] extension not found (misconfiguration)
pub async fn require_token(request: Request, next: Next) -> Response {
    let expected = match request.extensions().get::<AuthToken>() {
        Some(token) => token.0.clone(),
        None => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Server configuration error"})),
            )
                .into_response();
        }
    };

    let provided = request
        .headers()
        .get("authorization")
        .map_or(&b""[..], |v| v.as_bytes());

    if !constant_time_eq(expected.as_bytes(), provided) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Unauthorized"})),
        )
            .into_response();
    }

    next.run(request).await
}

/// Constant-time byte comparison to prevent timing side-channel attacks.
///
/// Always iterates over the full length of `expected` regardless of `provided`
/// length, so an attacker cannot determine the token length from response times.
pub fn constant_time_eq(expected: &[u8], provided: &[u8]) -> bool {
    let mut diff = u8::from(expected.len() != provided.len());
    // Always iterate over the expected token length to avoid timing leak
    for i in 0..expected.len() {
        let p = if i < provided.len() {
            provided[i]
        } else {
            0xff
        };
        diff |= expected[i] ^ p;
    }
    diff == 0
}

/// Extension type carrying the expected token, injected into the router
/// layer so [`require_token`] can access it without touching `AppState`.
#[derive(Clone)]
pub struct AuthToken(pub String);

impl AuthToken {
    /// Load the token from `path`, trimmed of surrounding whitespace.
    ///
    /// A missing or unreadable file degrades to the empty token: the server
    /// keeps running but accepts requests without credentials.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self(contents.trim().to_string()),
            Err(_) => {
                warn!(
                    "Auth token file {} not found, API will be unprotected",
                    path.display()
                );
                Self(String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq_equal() {
        assert!(constant_time_eq(b"secret123", b"secret123"));
    }

    #[test]
    fn test_constant_time_eq_mismatch() {
        assert!(!constant_time_eq(b"secret123", b"secret124"));
    }

    #[test]
    fn test_constant_time_eq_length_mismatch() {
        assert!(!constant_time_eq(b"secret123", b"secret"));
        assert!(!constant_time_eq(b"secret123", b""));
    }

    #[test]
    fn test_constant_time_eq_both_empty() {
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_load_trims_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth_token.txt");
        std::fs::write(&path, "  secret123\n").unwrap();
        assert_eq!(AuthToken::load(&path).0, "secret123");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(AuthToken::load(&dir.path().join("absent.txt")).0, "");
    }
}
