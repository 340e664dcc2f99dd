//! Administrator authentication configuration.

use serde::{Deserialize, Serialize};

/// Admin credential and token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Administrator username.
    #[serde(default = "default_username")]
    pub username: String,
    /// Argon2id PHC string for the administrator password.
    ///
    /// Generate one with `couponhub-cli admin hash-password`. When empty,
    /// every login attempt is rejected.
    #[serde(default)]
    pub password_hash: String,
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Admin token TTL in minutes.
    #[serde(default = "default_jwt_ttl")]
    pub jwt_ttl_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password_hash: String::new(),
            jwt_secret: default_jwt_secret(),
            jwt_ttl_minutes: default_jwt_ttl(),
        }
    }
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_jwt_ttl() -> u64 {
    60
}
