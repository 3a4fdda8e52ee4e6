#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unused_async)]

//! otad library - exposes core modules for integration tests and downstream crates.
//!
//! - `auth` - shared-token authorization middleware
//! - `checksum` - streaming SHA-256 of the firmware image
//! - `config` - configuration loading
//! - `logging` - request/response logging middleware
//! - `routes` - REST API route handlers and router assembly
//! - `state` - shared application state

pub mod auth;
pub mod checksum;
pub mod config;
pub mod logging;
pub mod routes;
pub mod state;

// Re-export key types at crate root for convenience.
pub use auth::AuthToken;
pub use config::Config;
pub use routes::build_router;
pub use state::AppState;
