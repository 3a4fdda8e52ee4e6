#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # otad
//!
//! Firmware distribution endpoint for embedded devices.
//!
//! otad exposes a small HTTP API that reports the current firmware version
//! and checksum, serves the firmware image itself, and accepts authenticated
//! updates to the version label. All state lives in three flat files next to
//! the process: the image is the payload, the label describes it, and the
//! token file holds the shared secret.
//!
//! ## API surface
//!
//! | Method | Path              | Auth | Description                        |
//! |--------|-------------------|------|------------------------------------|
//! | GET    | `/health`         | No   | Liveness probe                     |
//! | GET    | `/version`        | Yes  | Version label + firmware checksum  |
//! | GET    | `/firmware`       | Yes  | Raw firmware image download        |
//! | POST   | `/update_version` | Yes  | Overwrite the version label        |
//!
//! Auth is a raw pre-shared token in the `Authorization` header. When the
//! token file is missing at startup the server runs unprotected and says so
//! in the log.
//!
//! ## Architecture
//!
//! ```text
//! main.rs       - entry point, config and token load, serve, graceful shutdown
//! auth.rs       - Authorization header middleware, constant-time comparison
//! checksum.rs   - streaming SHA-256 of the firmware image
//! config.rs     - TOML + env-var configuration
//! logging.rs    - request/response logging middleware
//! state.rs      - shared AppState
//! routes/
//!   health.rs   - GET /health
//!   version.rs  - GET /version, POST /update_version
//!   firmware.rs - GET /firmware
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use otad::auth::AuthToken;
use otad::config::Config;
use otad::routes::build_router;
use otad::AppState;

/// Firmware distribution endpoint for embedded devices.
#[derive(Parser)]
#[command(name = "otad", version)]
struct Cli {
    /// Path to TOML config file.
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref());

    // Initialize tracing
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    info!("otad v{} starting", env!("CARGO_PKG_VERSION"));
    info!("Listening on {}", config.server.listen);

    // Missing token file logs a warning and leaves the API unprotected.
    let token = AuthToken::load(&config.storage.token_file);

    let state = AppState::new(config, token);
    let app = build_router(state.clone());

    let listener = TcpListener::bind(&state.config.server.listen)
        .await
        .expect("Failed to bind");

    info!("Server ready");

    // Graceful shutdown
    let shutdown = async {
        let ctrl_c = tokio::signal::ctrl_c();
        #[cfg(unix)]
        {
            let mut sigterm =
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to register SIGTERM");
            tokio::select! {
                _ = ctrl_c => info!("Received SIGINT"),
                _ = sigterm.recv() => info!("Received SIGTERM"),
            }
        }
        #[cfg(not(unix))]
        {
            ctrl_c.await.ok();
            info!("Received SIGINT");
        }
    };

    // ConnectInfo gives the request logger real peer addresses.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
    .expect("Server error");

    info!("Goodbye");
}
