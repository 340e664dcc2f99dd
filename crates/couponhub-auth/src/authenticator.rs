//! Pluggable admin credential check and the login gate built on it.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use couponhub_core::config::AuthConfig;
use couponhub_core::error::AppError;

use crate::jwt::{AdminClaims, AdminToken, JwtCodec};
use crate::password::PasswordHasher;

/// An authenticated administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPrincipal {
    /// Administrator username.
    pub username: String,
}

/// Verifies administrator credentials.
#[async_trait]
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// Returns the principal when `username`/`password` are valid.
    async fn authenticate(&self, username: &str, password: &str)
    -> Result<AdminPrincipal, AppError>;
}

/// Checks a single configured username against an Argon2id hash.
#[derive(Debug, Clone)]
pub struct CredentialAuthenticator {
    username: String,
    password_hash: String,
    hasher: PasswordHasher,
}

impl CredentialAuthenticator {
    /// Creates an authenticator for the configured administrator.
    pub fn new(config: &AuthConfig) -> Self {
        if config.password_hash.is_empty() {
            warn!("No admin password hash configured; admin login is disabled");
        }
        Self {
            username: config.username.clone(),
            password_hash: config.password_hash.clone(),
            hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl Authenticator for CredentialAuthenticator {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminPrincipal, AppError> {
        if self.password_hash.is_empty() {
            return Err(AppError::authentication("Admin login is disabled"));
        }

        let password_ok = self.hasher.verify_password(password, &self.password_hash)?;
        if username != self.username || !password_ok {
            warn!(username = %username, "Rejected admin login");
            return Err(AppError::authentication("Invalid username or password"));
        }

        Ok(AdminPrincipal {
            username: self.username.clone(),
        })
    }
}

/// Admin login gate: credential check plus token issuance.
#[derive(Debug, Clone)]
pub struct AdminGate {
    authenticator: Arc<dyn Authenticator>,
    codec: JwtCodec,
}

impl AdminGate {
    /// Creates a gate over any authenticator.
    pub fn new(authenticator: Arc<dyn Authenticator>, codec: JwtCodec) -> Self {
        Self {
            authenticator,
            codec,
        }
    }

    /// Creates the gate for the configured administrator.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            Arc::new(CredentialAuthenticator::new(config)),
            JwtCodec::new(config),
        )
    }

    /// Checks credentials and issues a token.
    pub async fn login(&self, username: &str, password: &str) -> Result<AdminToken, AppError> {
        let principal = self.authenticator.authenticate(username, password).await?;
        let token = self.codec.issue(&principal.username)?;
        info!(username = %principal.username, expires_at = %token.expires_at, "Admin logged in");
        Ok(token)
    }

    /// Validates a bearer token.
    pub fn verify(&self, token: &str) -> Result<AdminClaims, AppError> {
        self.codec.verify(token)
    }
}
