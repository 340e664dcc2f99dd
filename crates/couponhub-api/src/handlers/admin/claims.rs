//! Claim history handler.

use axum::Json;
use axum::extract::State;

use couponhub_entity::claim::ClaimRecord;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AdminSession;
use crate::state::AppState;

/// GET /api/admin/claims
pub async fn list_claims(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> Result<Json<ApiResponse<Vec<ClaimRecord>>>, ApiError> {
    let claims = state.coupon_service.claims().await?;
    Ok(Json(ApiResponse::ok(claims)))
}
