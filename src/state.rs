//! Shared application state passed to every handler via Axum's `State` extractor.

use std::sync::Arc;
use std::time::Instant;

use crate::auth::AuthToken;
use crate::config::Config;

/// Shared application state for the otad server.
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration loaded at startup.
    pub config: Arc<Config>,
    /// Expected `Authorization` header value, loaded once at startup and
    /// never changed for the process lifetime.
    pub token: AuthToken,
    /// Monotonic instant when the server started (for uptime calculation).
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config, token: AuthToken) -> Self {
        Self {
            config: Arc::new(config),
            token,
            start_time: Instant::now(),
        }
    }
}
