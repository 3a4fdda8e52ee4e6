//! Configuration loading and defaults.
//!
//! Configuration is resolved in order of precedence (highest wins):
//!
//! 1. **Environment variables** - `OTAD_LISTEN`, `OTAD_FIRMWARE_FILE`,
//!    `OTAD_VERSION_FILE`, `OTAD_TOKEN_FILE`
//! 2. **Config file** - path via `--config <path>`, or `otad.toml` in CWD
//! 3. **Compiled defaults** - see each field's default value below
//!
//! The TOML file mirrors the struct hierarchy:
//!
//! ```toml
//! [server]
//! listen = "0.0.0.0:5000"
//!
//! [storage]
//! firmware_file = "firmware.bin"
//! version_file = "version.txt"
//! token_file = "auth_token.txt"
//!
//! [logging]
//! level = "info"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration, deserialized from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind (default `0.0.0.0:5000`).
    #[serde(default = "default_listen")]
    pub listen: String,
}

/// On-disk locations of the three state files. Relative paths resolve
/// against the process working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Firmware image served by `GET /firmware` (default `firmware.bin`).
    #[serde(default = "default_firmware_file")]
    pub firmware_file: PathBuf,
    /// Version label file (default `version.txt`).
    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,
    /// Shared-secret token file read once at startup (default `auth_token.txt`).
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// tracing filter level (default `info`). Overridden by `RUST_LOG` env var.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_listen() -> String {
    "0.0.0.0:5000".to_string()
}
fn default_firmware_file() -> PathBuf {
    PathBuf::from("firmware.bin")
}
fn default_version_file() -> PathBuf {
    PathBuf::from("version.txt")
}
fn default_token_file() -> PathBuf {
    PathBuf::from("auth_token.txt")
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            firmware_file: default_firmware_file(),
            version_file: default_version_file(),
            token_file: default_token_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration with the precedence chain: env vars > file > defaults.
    ///
    /// If `path` is `Some`, reads that file (panics on failure). Otherwise looks
    /// for `otad.toml` in the current directory, falling back to compiled defaults.
    pub fn load(path: Option<&str>) -> Self {
        let mut config = if let Some(p) = path {
            let content = std::fs::read_to_string(p)
                .unwrap_or_else(|e| panic!("Failed to read config file {p}: {e}"));
            toml::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse config file {p}: {e}"))
        } else if Path::new("otad.toml").exists() {
            let content = std::fs::read_to_string("otad.toml").expect("Failed to read otad.toml");
            toml::from_str(&content).expect("Failed to parse otad.toml")
        } else {
            Config {
                server: ServerConfig::default(),
                storage: StorageConfig::default(),
                logging: LoggingConfig::default(),
            }
        };

        // Env var overrides
        if let Ok(listen) = std::env::var("OTAD_LISTEN") {
            config.server.listen = listen;
        }
        if let Ok(firmware) = std::env::var("OTAD_FIRMWARE_FILE") {
            config.storage.firmware_file = PathBuf::from(firmware);
        }
        if let Ok(version) = std::env::var("OTAD_VERSION_FILE") {
            config.storage.version_file = PathBuf::from(version);
        }
        if let Ok(token) = std::env::var("OTAD_TOKEN_FILE") {
            config.storage.token_file = PathBuf::from(token);
        }

        config
    }
}
