//! HTTP server configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Number of worker threads (None lets the runtime decide)
    pub workers: Option<usize>,

    /// Keep-alive timeout in seconds
    pub keep_alive: u64,

    /// Maximum JSON payload size in bytes
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: None,
            keep_alive: 75,
            max_payload_size: 1024 * 1024, // 1MB
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Load server configuration from the environment.
    ///
    /// `SERVER_HOST` and `SERVER_PORT` override the defaults; an unset
    /// variable keeps the default, but a set-and-unparseable port is a
    /// configuration error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("SERVER_HOST") {
            if !host.is_empty() {
                config.host = host;
            }
        }

        if let Ok(port) = std::env::var("SERVER_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::Invalid {
                name: "SERVER_PORT",
                reason: format!("expected a port number, got {:?}", port),
            })?;
        }

        if let Ok(workers) = std::env::var("SERVER_WORKERS") {
            config.workers = workers.parse().ok();
        }

        Ok(config)
    }

    /// Get the full bind address as host:port
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
