//! HS256 signing and validation of admin tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use couponhub_core::config::AuthConfig;
use couponhub_core::error::AppError;

use super::claims::AdminClaims;

/// Upper bound on token lifetime (one year).
const MAX_TTL_MINUTES: i64 = 60 * 24 * 365;

/// A signed admin token and its expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminToken {
    /// Bearer token value.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

/// Issues and validates admin tokens.
#[derive(Clone)]
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtCodec")
            .field("validation", &self.validation)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl JwtCodec {
    /// Creates a codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            ttl: Duration::minutes(
                i64::try_from(config.jwt_ttl_minutes)
                    .unwrap_or(MAX_TTL_MINUTES)
                    .min(MAX_TTL_MINUTES),
            ),
        }
    }

    /// Issues a token for `username`.
    pub fn issue(&self, username: &str) -> Result<AdminToken, AppError> {
        let now = Utc::now();
        let expires_at = now + self.ttl;
        let claims = AdminClaims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode admin token: {e}")))?;

        Ok(AdminToken { token, expires_at })
    }

    /// Validates signature and expiry and returns the claims.
    pub fn verify(&self, token: &str) -> Result<AdminClaims, AppError> {
        decode::<AdminClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::authentication(format!("Invalid admin token: {e}")))
    }
}
