//! Network address from request metadata.

use std::net::SocketAddr;

use couponhub_entity::identity::UNKNOWN_ADDRESS;

/// Transport-level facts about an incoming request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetadata {
    /// Raw `X-Forwarded-For` header.
    pub forwarded_for: Option<String>,
    /// Raw `X-Real-IP` header.
    pub real_ip: Option<String>,
    /// Socket address of the peer.
    pub peer: Option<SocketAddr>,
    /// Raw `User-Agent` header.
    pub user_agent: Option<String>,
}

impl RequestMetadata {
    /// The client address.
    ///
    /// With `trust_forwarded` the first `X-Forwarded-For` hop wins, then
    /// `X-Real-IP`. Without it both headers are ignored, since any client
    /// can set them. The peer address comes next, then `unknown`.
    pub fn client_address(&self, trust_forwarded: bool) -> String {
        if !trust_forwarded {
            return self.peer_address();
        }

        let forwarded = self
            .forwarded_for
            .as_deref()
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|hop| !hop.is_empty());

        let real_ip = self
            .real_ip
            .as_deref()
            .map(str::trim)
            .filter(|ip| !ip.is_empty());

        match forwarded.or(real_ip) {
            Some(hop) => hop.to_string(),
            None => self.peer_address(),
        }
    }

    fn peer_address(&self) -> String {
        self.peer
            .map(|peer| peer.ip().to_string())
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string())
    }
}
