//! External IP-echo lookup.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use couponhub_core::config::IdentityConfig;
use couponhub_core::error::{AppError, ErrorKind};

/// Discovers the public address of the current host.
#[async_trait]
pub trait IpLookup: Send + Sync + fmt::Debug {
    /// Returns the address reported by the lookup service.
    async fn lookup(&self) -> Result<String, AppError>;
}

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// Lookup against an ipify-style endpoint returning `{"ip": "..."}`.
#[derive(Debug, Clone)]
pub struct HttpIpLookup {
    client: reqwest::Client,
    url: String,
}

impl HttpIpLookup {
    /// Builds a client with the configured timeout.
    pub fn new(config: &IdentityConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.lookup_timeout_ms))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            url: config.lookup_url.clone(),
        })
    }
}

#[async_trait]
impl IpLookup for HttpIpLookup {
    async fn lookup(&self) -> Result<String, AppError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "IP lookup request failed", e)
            })?;

        let body: IpResponse = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, "Malformed IP lookup response", e)
        })?;

        let ip = body.ip.trim();
        if ip.is_empty() {
            return Err(AppError::external_service("IP lookup returned an empty address"));
        }
        Ok(ip.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_is_external_service_error() {
        let lookup = HttpIpLookup::new(&IdentityConfig {
            lookup_url: "http://127.0.0.1:9/".to_string(),
            lookup_timeout_ms: 500,
            ..Default::default()
        })
        .expect("client");

        let err = lookup.lookup().await.expect_err("unreachable");
        assert_eq!(err.kind, ErrorKind::ExternalService);
    }
}
