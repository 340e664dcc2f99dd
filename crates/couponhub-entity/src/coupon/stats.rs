//! Pool statistics value object.

use serde::{Deserialize, Serialize};

use super::model::Coupon;

/// Summary counts over the coupon pool and claim history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStats {
    /// Every coupon in the pool.
    pub total: usize,
    /// Active and not yet redeemed.
    pub available: usize,
    /// Already handed out.
    pub redeemed: usize,
    /// Deactivated by an administrator.
    pub inactive: usize,
    /// Entries in the claim history.
    pub claims: usize,
}

impl PoolStats {
    /// Computes the counts for `coupons` and a history of `claims` entries.
    pub fn compute(coupons: &[Coupon], claims: usize) -> Self {
        Self {
            total: coupons.len(),
            available: coupons.iter().filter(|c| c.is_available()).count(),
            redeemed: coupons.iter().filter(|c| c.is_redeemed).count(),
            inactive: coupons.iter().filter(|c| !c.is_active).count(),
            claims,
        }
    }
}
