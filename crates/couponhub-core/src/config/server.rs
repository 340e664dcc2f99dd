//! HTTP listener settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where and how the HTTP API listens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests running longer than this are answered with 408.
    pub request_timeout_seconds: u64,
    /// How long in-flight requests may drain after a shutdown signal.
    pub shutdown_grace_seconds: u64,
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_seconds: 30,
            shutdown_grace_seconds: 10,
            cors: CorsConfig::default(),
        }
    }
}

/// Cross-origin rules for browser clients of the claim endpoint.
///
/// A single `"*"` entry in origins or headers allows any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    /// Preflight cache lifetime.
    pub max_age_seconds: u64,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: strings(&["*"]),
            allowed_methods: strings(&["GET", "POST", "PUT", "OPTIONS"]),
            allowed_headers: strings(&["*"]),
            max_age_seconds: 3600,
        }
    }
}
