//! Claim record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use couponhub_core::types::{ClaimId, CouponId};

use crate::coupon::Coupon;
use crate::identity::Identity;

/// Immutable log entry produced by a successful claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    /// Unique claim identifier.
    pub id: ClaimId,
    /// The coupon that was claimed.
    pub coupon_id: CouponId,
    /// Denormalized coupon code at claim time.
    pub coupon_code: String,
    /// Who claimed it.
    #[serde(rename = "userInfo")]
    pub identity: Identity,
    /// When the claim happened.
    pub claimed_at: DateTime<Utc>,
}

impl ClaimRecord {
    /// Builds the record for `coupon` being claimed by `identity` at `now`.
    pub fn for_coupon(coupon: &Coupon, identity: Identity, now: DateTime<Utc>) -> Self {
        Self {
            id: ClaimId::generate(),
            coupon_id: coupon.id,
            coupon_code: coupon.code.clone(),
            identity,
            claimed_at: now,
        }
    }
}
