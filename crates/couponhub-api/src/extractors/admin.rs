//! `AdminSession` extractor: pulls the bearer token from the Authorization
//! header and validates it.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use couponhub_auth::AdminClaims;
use couponhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Validated admin token claims available in handlers.
#[derive(Debug, Clone)]
pub struct AdminSession(pub AdminClaims);

impl AdminSession {
    /// Username the token was issued to.
    pub fn username(&self) -> &str {
        &self.0.sub
    }
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state.admin_gate.verify(token.trim())?;
        Ok(AdminSession(claims))
    }
}
