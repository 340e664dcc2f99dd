//! Public claim handler.

use axum::Json;
use axum::extract::State;

use crate::dto::request::ClaimRequest;
use crate::dto::response::ClaimResponse;
use crate::error::ApiError;
use crate::extractors::{ClientMetadata, ValidatedJson};
use crate::state::AppState;

/// POST /api/claims
///
/// Business outcomes all answer 200; only persistence failures are errors.
pub async fn claim(
    State(state): State<AppState>,
    ClientMetadata(meta): ClientMetadata,
    ValidatedJson(req): ValidatedJson<ClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let identity = state
        .identity_resolver
        .resolve(&meta, req.fingerprint.as_deref(), req.environment)
        .await;

    let outcome = state.claim_service.claim(identity).await?;
    Ok(Json(ClaimResponse::from(outcome)))
}
