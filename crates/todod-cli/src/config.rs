//! Server configuration with a resolution chain: CLI flag > env var > default.

use anyhow::{Context, Result};

/// Default bind address, matching the service's original deployment.
pub const DEFAULT_BIND: &str = "0.0.0.0";
/// Default listen port.
pub const DEFAULT_PORT: u16 = 5001;

/// Fully resolved server configuration, ready for use.
#[derive(Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl ServerConfig {
    /// Resolve configuration using the chain: CLI flag > env var > default.
    ///
    /// - Bind: `cli_bind` > `TODOD_BIND` env > `DEFAULT_BIND`
    /// - Port: `cli_port` > `TODOD_PORT` env (must parse) > `DEFAULT_PORT`
    pub fn resolve(cli_bind: Option<&str>, cli_port: Option<u16>) -> Result<Self> {
        let bind = if let Some(bind) = cli_bind {
            bind.to_string()
        } else if let Ok(bind) = std::env::var("TODOD_BIND") {
            bind
        } else {
            DEFAULT_BIND.to_string()
        };

        let port = if let Some(port) = cli_port {
            port
        } else if let Ok(raw) = std::env::var("TODOD_PORT") {
            raw.parse()
                .with_context(|| format!("TODOD_PORT env var is not a valid port: {raw}"))?
        } else {
            DEFAULT_PORT
        };

        Ok(Self { bind, port })
    }
}

/// Whether the `DEBUG_MODE` operational toggle is active.
///
/// When set to `1` the default log filter drops to `debug`. The toggle
/// never alters HTTP semantics.
pub fn debug_mode() -> bool {
    std::env::var("DEBUG_MODE").is_ok_and(|v| v == "1")
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
