//! # couponhub-api
//!
//! HTTP API layer for CouponHub built on Axum.
//!
//! Provides the public claim endpoint, the bearer-protected admin
//! endpoints, middleware (CORS, logging, tracing), extractors, DTOs, and
//! error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
