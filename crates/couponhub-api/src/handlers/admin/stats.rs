//! Pool statistics handler.

use axum::Json;
use axum::extract::State;

use couponhub_entity::coupon::PoolStats;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AdminSession;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> Result<Json<ApiResponse<PoolStats>>, ApiError> {
    let stats = state.coupon_service.stats().await?;
    Ok(Json(ApiResponse::ok(stats)))
}
