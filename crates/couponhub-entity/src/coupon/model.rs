//! Coupon entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use couponhub_core::types::CouponId;

use crate::identity::Identity;

/// A coupon in the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Unique coupon identifier.
    pub id: CouponId,
    /// Code shown to the claimant.
    pub code: String,
    /// Human-readable description.
    pub description: String,
    /// Whether administrators have made the coupon claimable.
    pub is_active: bool,
    /// Whether the coupon has been handed out.
    pub is_redeemed: bool,
    /// When the coupon was redeemed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redeemed_at: Option<DateTime<Utc>>,
    /// Who redeemed it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redeemed_by: Option<Identity>,
    /// When the coupon was created.
    pub created_at: DateTime<Utc>,
    /// When the coupon was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Coupon {
    /// Creates a fresh, unredeemed coupon stamped at `now`.
    pub fn create(data: CreateCoupon, now: DateTime<Utc>) -> Self {
        Self {
            id: CouponId::generate(),
            code: data.code,
            description: data.description,
            is_active: data.is_active,
            is_redeemed: false,
            redeemed_at: None,
            redeemed_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the allocator may hand this coupon out.
    pub fn is_available(&self) -> bool {
        self.is_active && !self.is_redeemed
    }

    /// Marks the coupon redeemed by `identity`.
    ///
    /// Redemption fields are written together and only once; calling this
    /// on an already-redeemed coupon leaves it untouched and returns `false`.
    pub fn redeem(&mut self, identity: Identity, now: DateTime<Utc>) -> bool {
        if self.is_redeemed {
            return false;
        }
        self.is_redeemed = true;
        self.redeemed_at = Some(now);
        self.redeemed_by = Some(identity);
        self.updated_at = now;
        true
    }

    /// Merges the provided fields and bumps `updated_at`.
    pub fn apply(&mut self, update: UpdateCoupon, now: DateTime<Utc>) {
        if let Some(code) = update.code {
            self.code = code;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.updated_at = now;
    }
}

/// Data required to create a new coupon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoupon {
    /// Coupon code.
    pub code: String,
    /// Description.
    pub description: String,
    /// Initial active flag.
    pub is_active: bool,
}

/// Partial update of an existing coupon.
///
/// Redemption fields are deliberately absent: only the allocator writes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCoupon {
    /// New code.
    pub code: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn sample(now: DateTime<Utc>) -> Coupon {
        Coupon::create(
            CreateCoupon {
                code: "WELCOME10".to_string(),
                description: "10% off".to_string(),
                is_active: true,
            },
            now,
        )
    }

    #[test]
    fn test_create_sets_both_timestamps() {
        let now = Utc::now();
        let coupon = sample(now);
        assert_eq!(coupon.created_at, now);
        assert_eq!(coupon.updated_at, now);
        assert!(coupon.is_available());
    }

    #[test]
    fn test_redeem_only_once() {
        let now = Utc::now();
        let mut coupon = sample(now);
        let later = now + Duration::minutes(5);

        assert!(coupon.redeem(Identity::new("1.1.1.1", "aa"), later));
        assert!(!coupon.is_available());
        assert_eq!(coupon.redeemed_at, Some(later));

        let first_owner = coupon.redeemed_by.clone();
        assert!(!coupon.redeem(Identity::new("2.2.2.2", "bb"), later + Duration::hours(1)));
        assert_eq!(coupon.redeemed_by, first_owner);
        assert_eq!(coupon.redeemed_at, Some(later));
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let now = Utc::now();
        let mut coupon = sample(now);
        let later = now + Duration::seconds(1);
        coupon.apply(
            UpdateCoupon {
                description: Some("15% off".to_string()),
                ..Default::default()
            },
            later,
        );
        assert_eq!(coupon.code, "WELCOME10");
        assert_eq!(coupon.description, "15% off");
        assert!(coupon.is_active);
        assert_eq!(coupon.updated_at, later);
    }

    #[test]
    fn test_json_uses_camel_case_and_omits_absent_fields() {
        let coupon = sample(Utc::now());
        let json = serde_json::to_value(&coupon).expect("serialize");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["isRedeemed"], false);
        assert!(json.get("redeemedAt").is_none());
        assert!(json.get("createdAt").is_some());
    }
}
