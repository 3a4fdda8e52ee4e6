//! HTTP route handlers and router assembly.
//!
//! Each sub-module corresponds to an API endpoint group. All handlers except
//! [`health`] require authentication via the [`crate::auth::require_token`]
//! middleware.

pub mod firmware;
pub mod health;
pub mod version;

use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};

use crate::auth;
use crate::logging;
use crate::AppState;

/// Assemble the application router with the full middleware chain.
///
/// Order, outermost first: request logging, response logging, then token
/// authorization on the protected routes only.
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new().route("/health", get(health::health));

    let protected_routes = Router::new()
        .route("/version", get(version::get_version))
        .route("/firmware", get(firmware::get_firmware))
        .route("/update_version", post(version::update_version))
        .layer(middleware::from_fn(auth::require_token));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(state.token.clone()))
        .layer(middleware::from_fn(logging::log_response))
        .layer(middleware::from_fn(logging::log_request))
        .with_state(state)
}
