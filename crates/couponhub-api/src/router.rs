//! Route definitions for the CouponHub HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to every handler via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the API router with all routes, without outer layers.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(claim_routes())
        .merge(admin_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Liveness and store health
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Public claim endpoint
fn claim_routes() -> Router<AppState> {
    Router::new().route("/claims", post(handlers::claim::claim))
}

/// Admin login and bearer-protected pool management
fn admin_routes() -> Router<AppState> {
    use handlers::admin;

    Router::new()
        .route("/admin/login", post(admin::auth::login))
        .route(
            "/admin/coupons",
            get(admin::coupons::list_coupons).post(admin::coupons::create_coupon),
        )
        .route(
            "/admin/coupons/{id}",
            get(admin::coupons::get_coupon).put(admin::coupons::update_coupon),
        )
        .route(
            "/admin/coupons/{id}/toggle",
            post(admin::coupons::toggle_coupon),
        )
        .route("/admin/claims", get(admin::claims::list_claims))
        .route("/admin/stats", get(admin::stats::stats))
}
