//! Request and response logging middleware.
//!
//! Two independent layers. [`log_request`] records method, path, and origin
//! before the rest of the chain runs; [`log_response`] records the status
//! code the chain settled on. Applied with [`log_request`] outermost so every
//! request is logged even when an inner layer short-circuits.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

/// Log method, path, and remote origin, then delegate to the inner chain.
///
/// The origin comes from the connection's [`ConnectInfo`] extension; it is
/// reported as `unknown` when the router is driven without a real socket
/// (in-process tests).
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let origin = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "unknown".to_string(), |info| info.0.to_string());
    info!("Request: {method} {path} - From: {origin}");
    next.run(request).await
}

/// Run the inner chain, then log the status code of the response it produced.
///
/// The status is read back from the returned response object, so a code set
/// deep inside a nested handler is the one recorded. Bodies and headers pass
/// through untouched.
pub async fn log_response(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    info!("Response: {}", response.status().as_u16());
    response
}
