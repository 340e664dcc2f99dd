//! Coupon pool management handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use couponhub_core::error::AppError;
use couponhub_core::types::CouponId;
use couponhub_entity::coupon::Coupon;

use crate::dto::request::{CreateCouponRequest, UpdateCouponRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AdminSession, PathParam, ValidatedJson};
use crate::state::AppState;

fn missing(id: CouponId) -> ApiError {
    ApiError(AppError::not_found(format!("Coupon {id} not found")))
}

/// GET /api/admin/coupons
pub async fn list_coupons(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> Result<Json<ApiResponse<Vec<Coupon>>>, ApiError> {
    let coupons = state.coupon_service.list().await?;
    Ok(Json(ApiResponse::ok(coupons)))
}

/// GET /api/admin/coupons/{id}
pub async fn get_coupon(
    State(state): State<AppState>,
    _admin: AdminSession,
    PathParam(id): PathParam<CouponId>,
) -> Result<Json<ApiResponse<Coupon>>, ApiError> {
    let coupon = state.coupon_service.get(id).await?;
    Ok(Json(ApiResponse::ok(coupon)))
}

/// POST /api/admin/coupons
pub async fn create_coupon(
    State(state): State<AppState>,
    admin: AdminSession,
    ValidatedJson(req): ValidatedJson<CreateCouponRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Coupon>>), ApiError> {
    let coupon = state.coupon_service.create(req.into()).await?;
    tracing::info!(admin = %admin.username(), coupon_id = %coupon.id, "Admin created coupon");
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(coupon))))
}

/// PUT /api/admin/coupons/{id}
pub async fn update_coupon(
    State(state): State<AppState>,
    admin: AdminSession,
    PathParam(id): PathParam<CouponId>,
    ValidatedJson(req): ValidatedJson<UpdateCouponRequest>,
) -> Result<Json<ApiResponse<Coupon>>, ApiError> {
    let coupon = state
        .coupon_service
        .update(id, req.into())
        .await?
        .ok_or_else(|| missing(id))?;
    tracing::info!(admin = %admin.username(), coupon_id = %id, "Admin updated coupon");
    Ok(Json(ApiResponse::ok(coupon)))
}

/// POST /api/admin/coupons/{id}/toggle
pub async fn toggle_coupon(
    State(state): State<AppState>,
    admin: AdminSession,
    PathParam(id): PathParam<CouponId>,
) -> Result<Json<ApiResponse<Coupon>>, ApiError> {
    let coupon = state
        .coupon_service
        .toggle_active(id)
        .await?
        .ok_or_else(|| missing(id))?;
    tracing::info!(
        admin = %admin.username(),
        coupon_id = %id,
        is_active = coupon.is_active,
        "Admin toggled coupon"
    );
    Ok(Json(ApiResponse::ok(coupon)))
}
