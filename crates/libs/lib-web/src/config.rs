//! # Server Configuration
//!
//! Loaded from environment variables (a `.env` file is read by the binary first).
//!
//! | Variable       | Default          | Meaning                                   |
//! |----------------|------------------|-------------------------------------------|
//! | `BIND_ADDRESS` | `127.0.0.1:8080` | Socket address the server listens on      |
//! | `DIST_DIR`     | `dist`           | Directory holding the built web bundle    |
//! | `LOG_LEVEL`    | `info`           | One of trace, debug, info, warn, error    |

use std::net::SocketAddr;
use std::path::PathBuf;

use lib_utils::get_env_or;

use crate::error::{AppError, Result};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080")
    pub bind_address: String,
    /// Directory served for everything that is not a server-rendered page
    pub dist_dir: PathBuf,
    /// Tracing filter level
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            dist_dir: PathBuf::from("dist"),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            bind_address: get_env_or("BIND_ADDRESS", &defaults.bind_address),
            dist_dir: PathBuf::from(get_env_or("DIST_DIR", "dist")),
            log_level: get_env_or("LOG_LEVEL", &defaults.log_level).to_lowercase(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_address.parse::<SocketAddr>().map_err(|e| {
            AppError::Config(format!("BIND_ADDRESS {:?} is not a socket address: {}", self.bind_address, e))
        })?;

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(AppError::Config(format!(
                "LOG_LEVEL must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }
}
