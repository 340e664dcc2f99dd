//! Identity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel address used when the real address could not be resolved.
pub const UNKNOWN_ADDRESS: &str = "unknown";

/// The (address, fingerprint) pair used to rate-limit claims.
///
/// Neither half is verified; both are best-effort hints supplied by
/// the identity resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Network address of the requester.
    #[serde(rename = "ip")]
    pub address: String,
    /// Device fingerprint of the requester.
    pub fingerprint: String,
    /// When the request that produced this identity was received.
    pub timestamp: DateTime<Utc>,
}

impl Identity {
    /// Creates an identity stamped with the current time.
    pub fn new(address: impl Into<String>, fingerprint: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            fingerprint: fingerprint.into(),
            timestamp: Utc::now(),
        }
    }

    /// Whether either half matches the other identity.
    pub fn overlaps(&self, other: &Identity) -> bool {
        self.address == other.address || self.fingerprint == other.fingerprint
    }

    /// Whether the address is the unresolved sentinel.
    pub fn has_unknown_address(&self) -> bool {
        self.address == UNKNOWN_ADDRESS
    }
}
