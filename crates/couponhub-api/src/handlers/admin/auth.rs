//! Admin login.

use axum::Json;
use axum::extract::State;

use couponhub_auth::AdminToken;

use crate::dto::request::LoginRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<AdminToken>>, ApiError> {
    let token = state.admin_gate.login(&req.username, &req.password).await?;
    Ok(Json(ApiResponse::ok(token)))
}
