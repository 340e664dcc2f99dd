//! Builds an [`Identity`] from request metadata and client hints.

use std::sync::Arc;

use tracing::warn;

use couponhub_core::config::{AddressSource, IdentityConfig};
use couponhub_core::error::AppError;
use couponhub_entity::identity::{Identity, UNKNOWN_ADDRESS};

use super::address::RequestMetadata;
use super::fingerprint::ClientEnvironment;
use super::lookup::{HttpIpLookup, IpLookup};

/// Resolves the (address, fingerprint) pair of a requester.
///
/// Neither half is verified. Resolution never fails: an address that
/// cannot be determined becomes `unknown`.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    source: AddressSource,
    lookup: Option<Arc<dyn IpLookup>>,
    /// Read `X-Forwarded-For` / `X-Real-IP` (only behind a trusted proxy).
    trust_forwarded: bool,
}

impl IdentityResolver {
    /// Resolver that reads the address from the peer socket only.
    pub fn from_request() -> Self {
        Self {
            source: AddressSource::Request,
            lookup: None,
            trust_forwarded: false,
        }
    }

    /// Resolver that asks `lookup` for the address.
    pub fn with_lookup(lookup: Arc<dyn IpLookup>) -> Self {
        Self {
            source: AddressSource::Lookup,
            lookup: Some(lookup),
            trust_forwarded: false,
        }
    }

    /// Lets forwarding headers override the peer address.
    pub fn trust_forwarded_headers(mut self, trust: bool) -> Self {
        self.trust_forwarded = trust;
        self
    }

    /// Builds the resolver selected by configuration.
    pub fn from_config(config: &IdentityConfig) -> Result<Self, AppError> {
        let resolver = match config.address_source {
            AddressSource::Request => Self::from_request(),
            AddressSource::Lookup => Self::with_lookup(Arc::new(HttpIpLookup::new(config)?)),
        };
        Ok(resolver.trust_forwarded_headers(config.trust_forwarded_headers))
    }

    /// The configured address source.
    pub fn source(&self) -> AddressSource {
        self.source
    }

    /// Resolves the full identity.
    pub async fn resolve(
        &self,
        meta: &RequestMetadata,
        fingerprint: Option<&str>,
        environment: Option<ClientEnvironment>,
    ) -> Identity {
        let address = self.resolve_address(meta).await;
        let fingerprint = Self::resolve_fingerprint(meta, fingerprint, environment);
        Identity::new(address, fingerprint)
    }

    /// Resolves the address half.
    pub async fn resolve_address(&self, meta: &RequestMetadata) -> String {
        let address = match (&self.source, &self.lookup) {
            (AddressSource::Lookup, Some(lookup)) => match lookup.lookup().await {
                Ok(ip) => ip,
                Err(err) => {
                    warn!(error = %err, "Address lookup failed");
                    UNKNOWN_ADDRESS.to_string()
                }
            },
            _ => meta.client_address(self.trust_forwarded),
        };

        if address == UNKNOWN_ADDRESS {
            warn!("Could not determine client address, using sentinel");
        }
        address
    }

    /// Resolves the fingerprint half.
    ///
    /// A non-blank client-supplied fingerprint wins; otherwise one is
    /// derived from the environment, with the user agent falling back to
    /// the request header.
    pub fn resolve_fingerprint(
        meta: &RequestMetadata,
        fingerprint: Option<&str>,
        environment: Option<ClientEnvironment>,
    ) -> String {
        if let Some(supplied) = fingerprint.map(str::trim).filter(|f| !f.is_empty()) {
            return supplied.to_string();
        }

        let mut environment = environment.unwrap_or_default();
        if environment.user_agent.trim().is_empty() {
            environment.user_agent = meta.user_agent.clone().unwrap_or_default();
        }
        environment.fingerprint()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    #[derive(Debug)]
    struct FixedLookup(Result<String, AppError>);

    #[async_trait]
    impl IpLookup for FixedLookup {
        async fn lookup(&self) -> Result<String, AppError> {
            self.0.clone()
        }
    }

    fn meta() -> RequestMetadata {
        RequestMetadata {
            forwarded_for: None,
            real_ip: Some("198.51.100.2".to_string()),
            peer: None,
            user_agent: Some("curl/8.0".to_string()),
        }
    }

    #[tokio::test]
    async fn test_request_source_uses_headers_when_trusted() {
        let identity = IdentityResolver::from_request()
            .trust_forwarded_headers(true)
            .resolve(&meta(), Some("abc"), None)
            .await;
        assert_eq!(identity.address, "198.51.100.2");
        assert_eq!(identity.fingerprint, "abc");
    }

    #[tokio::test]
    async fn test_request_source_defaults_to_peer() {
        let meta = RequestMetadata {
            peer: Some("203.0.113.50:40000".parse().expect("addr")),
            ..meta()
        };

        let resolver = IdentityResolver::from_config(&IdentityConfig::default()).expect("resolver");
        assert_eq!(resolver.resolve_address(&meta).await, "203.0.113.50");

        let trusting = IdentityResolver::from_config(&IdentityConfig {
            trust_forwarded_headers: true,
            ..Default::default()
        })
        .expect("resolver");
        assert_eq!(trusting.resolve_address(&meta).await, "198.51.100.2");
    }

    #[tokio::test]
    async fn test_lookup_source_and_failure_fallback() {
        let ok = IdentityResolver::with_lookup(Arc::new(FixedLookup(Ok("203.0.113.9".to_string()))));
        assert_eq!(ok.resolve_address(&meta()).await, "203.0.113.9");

        let failing = IdentityResolver::with_lookup(Arc::new(FixedLookup(Err(
            AppError::external_service("timeout"),
        ))));
        assert_eq!(failing.resolve_address(&meta()).await, UNKNOWN_ADDRESS);
    }

    #[test]
    fn test_fingerprint_derived_with_header_user_agent() {
        let env = ClientEnvironment {
            screen_width: 1280,
            screen_height: 720,
            color_depth: 24,
            timezone: "UTC".to_string(),
            ..Default::default()
        };
        let derived = IdentityResolver::resolve_fingerprint(&meta(), Some("  "), Some(env.clone()));

        let expected = ClientEnvironment {
            user_agent: "curl/8.0".to_string(),
            ..env
        }
        .fingerprint();
        assert_eq!(derived, expected);
    }

    #[test]
    fn test_from_config_selects_source() {
        let resolver = IdentityResolver::from_config(&IdentityConfig::default()).expect("resolver");
        assert_eq!(resolver.source(), AddressSource::Request);

        let resolver = IdentityResolver::from_config(&IdentityConfig {
            address_source: AddressSource::Lookup,
            ..Default::default()
        })
        .expect("resolver");
        assert_eq!(resolver.source(), AddressSource::Lookup);
    }
}
