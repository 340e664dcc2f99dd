//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use couponhub_entity::coupon::{CreateCoupon, UpdateCoupon};
use couponhub_service::ClientEnvironment;

/// Public claim request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    /// Client-computed fingerprint.
    #[validate(length(max = 256, message = "Fingerprint is too long"))]
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// Environment attributes to derive a fingerprint from.
    #[serde(default)]
    pub environment: Option<ClientEnvironment>,
}

/// Admin login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create coupon request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCouponRequest {
    /// Coupon code.
    #[validate(length(min = 1, max = 64, message = "Code must be 1-64 characters"))]
    pub code: String,
    /// Description.
    #[validate(length(min = 1, max = 512, message = "Description must be 1-512 characters"))]
    pub description: String,
    /// Whether the coupon is claimable right away.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl From<CreateCouponRequest> for CreateCoupon {
    fn from(req: CreateCouponRequest) -> Self {
        Self {
            code: req.code,
            description: req.description,
            is_active: req.is_active,
        }
    }
}

/// Partial coupon update (admin).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCouponRequest {
    /// New code.
    #[validate(length(min = 1, max = 64, message = "Code must be 1-64 characters"))]
    pub code: Option<String>,
    /// New description.
    #[validate(length(min = 1, max = 512, message = "Description must be 1-512 characters"))]
    pub description: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

impl From<UpdateCouponRequest> for UpdateCoupon {
    fn from(req: UpdateCouponRequest) -> Self {
        Self {
            code: req.code,
            description: req.description,
            is_active: req.is_active,
        }
    }
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_to_active() {
        let req: CreateCouponRequest =
            serde_json::from_str(r#"{"code": "NEW5", "description": "5% off"}"#).expect("parse");
        assert!(req.is_active);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_code_fails_validation() {
        let req = CreateCouponRequest {
            code: String::new(),
            description: "x".to_string(),
            is_active: true,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_absent_fields_pass() {
        let req: UpdateCouponRequest =
            serde_json::from_str(r#"{"isActive": false}"#).expect("parse");
        assert!(req.validate().is_ok());
        assert_eq!(req.is_active, Some(false));
    }
}
