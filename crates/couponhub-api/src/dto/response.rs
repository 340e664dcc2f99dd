//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use couponhub_entity::coupon::Coupon;
use couponhub_service::ClaimOutcome;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Outcome of a public claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    /// Whether a coupon was handed out.
    pub success: bool,
    /// Message for the requester.
    pub message: String,
    /// The claimed coupon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<Coupon>,
    /// Hours until the requester may claim again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_remaining: Option<i64>,
}

impl From<ClaimOutcome> for ClaimResponse {
    fn from(outcome: ClaimOutcome) -> Self {
        let success = outcome.is_success();
        let hours_remaining = outcome.hours_remaining();
        match outcome {
            ClaimOutcome::Claimed { coupon, message } => Self {
                success,
                message,
                coupon: Some(coupon),
                hours_remaining,
            },
            ClaimOutcome::CooldownActive { message, .. }
            | ClaimOutcome::NoCouponsAvailable { message } => Self {
                success,
                message,
                coupon: None,
                hours_remaining,
            },
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Status string.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: i64,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Store backend name.
    pub store: String,
    /// Whether the store answered its health check.
    pub store_healthy: bool,
    /// When the server started.
    pub started_at: DateTime<Utc>,
}
