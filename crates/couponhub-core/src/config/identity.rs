//! Requester identity resolution configuration.

use serde::{Deserialize, Serialize};

/// Where the network address half of an identity comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressSource {
    /// The peer socket address, or forwarding headers when trusted.
    #[default]
    Request,
    /// An external IP-echo service.
    Lookup,
}

/// Identity resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Address source strategy.
    #[serde(default)]
    pub address_source: AddressSource,
    /// URL of the IP-echo service (returns `{"ip": "..."}`).
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,
    /// Lookup timeout in milliseconds.
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_ms: u64,
    /// Take the address from `X-Forwarded-For` / `X-Real-IP`. Enable only
    /// behind a reverse proxy that overwrites them; clients can forge both.
    #[serde(default)]
    pub trust_forwarded_headers: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            address_source: AddressSource::default(),
            lookup_url: default_lookup_url(),
            lookup_timeout_ms: default_lookup_timeout(),
            trust_forwarded_headers: false,
        }
    }
}

fn default_lookup_url() -> String {
    "https://api.ipify.org?format=json".to_string()
}

fn default_lookup_timeout() -> u64 {
    3000
}
