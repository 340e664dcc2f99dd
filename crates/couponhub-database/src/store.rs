//! Document store trait shared by every persistence backend.

use std::fmt;

use async_trait::async_trait;
use tracing::{error, warn};

use couponhub_core::result::AppResult;
use couponhub_entity::claim::ClaimRecord;
use couponhub_entity::coupon::Coupon;

/// Document key of the coupon pool collection.
pub const COUPONS_KEY: &str = "coupons";

/// Document key of the claim history collection.
pub const CLAIMS_KEY: &str = "claims";

/// Keyed document store holding the coupon pool and the claim history.
///
/// Reads must observe the latest completed write, and writes must be
/// durable before they return. Callers serialize read-modify-write cycles
/// themselves; the store only guarantees that each call is applied whole.
#[async_trait]
pub trait CouponStore: Send + Sync + fmt::Debug + 'static {
    /// Short backend name for logs and health output.
    fn provider(&self) -> &'static str;

    /// Loads the full coupon pool in creation order.
    async fn load_coupons(&self) -> AppResult<Vec<Coupon>>;

    /// Replaces the coupon pool.
    async fn save_coupons(&self, coupons: &[Coupon]) -> AppResult<()>;

    /// Loads the full claim history in append order.
    async fn load_claims(&self) -> AppResult<Vec<ClaimRecord>>;

    /// Appends one record to the claim history.
    async fn append_claim(&self, claim: &ClaimRecord) -> AppResult<()>;

    /// Whether the coupon pool document has ever been written.
    async fn is_initialized(&self) -> AppResult<bool>;

    /// Checks that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Persists a redemption and its claim record as one unit.
    ///
    /// `previous` is the pool as it was loaded, `updated` the pool with the
    /// coupon marked redeemed. Backends that cannot transact fall back to
    /// this implementation: write the pool, append the record, and restore
    /// `previous` if the append fails.
    async fn commit_claim(
        &self,
        previous: &[Coupon],
        updated: &[Coupon],
        claim: &ClaimRecord,
    ) -> AppResult<()> {
        self.save_coupons(updated).await?;

        if let Err(err) = self.append_claim(claim).await {
            warn!(
                provider = self.provider(),
                coupon_id = %claim.coupon_id,
                error = %err,
                "Claim append failed, restoring coupon pool"
            );
            if let Err(rollback) = self.save_coupons(previous).await {
                error!(
                    provider = self.provider(),
                    coupon_id = %claim.coupon_id,
                    error = %rollback,
                    "Coupon pool rollback failed; coupon left redeemed without a claim record"
                );
            }
            return Err(err);
        }

        Ok(())
    }
}
