//! Configuration management following 12-factor app principles
//!
//! Runtime settings are loaded from environment variables. Document store
//! settings live with the store backends in `rai-docstore`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Default HTTP port
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Port the local server binds to
    pub port: u16,

    /// Comma-separated list of allowed CORS origins, or `*`
    pub cors_allowed_origins: String,

    /// Tracing filter directive
    pub rust_log: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
            rust_log: env::var("RUST_LOG")
                .unwrap_or_else(|_| "rai=info,tower_http=info".to_string()),
        })
    }
}
