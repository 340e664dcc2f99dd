//! The coupon allocator.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use couponhub_core::config::ClaimConfig;
use couponhub_core::error::{AppError, ErrorKind};
use couponhub_database::CouponStore;
use couponhub_entity::claim::ClaimRecord;
use couponhub_entity::identity::Identity;

use super::outcome::ClaimOutcome;
use super::policy::CooldownPolicy;
use crate::lock::PoolLock;

/// Hands out coupons, one per identity per cooldown window.
#[derive(Debug, Clone)]
pub struct ClaimService {
    /// Coupon and claim documents.
    store: Arc<dyn CouponStore>,
    /// Pool-wide write lock, shared with pool management.
    lock: PoolLock,
    /// Length of the cooldown window.
    cooldown: Duration,
    /// Which earlier claims count against a requester.
    policy: CooldownPolicy,
}

impl ClaimService {
    /// Creates a new claim service.
    pub fn new(store: Arc<dyn CouponStore>, lock: PoolLock, config: &ClaimConfig) -> Self {
        Self {
            store,
            lock,
            cooldown: config.cooldown(),
            policy: CooldownPolicy::default(),
        }
    }

    /// Replaces the cooldown matching rule.
    pub fn with_policy(mut self, policy: CooldownPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured cooldown window.
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Claims the next available coupon for `identity` at the current time.
    pub async fn claim(&self, identity: Identity) -> Result<ClaimOutcome, AppError> {
        self.claim_at(identity, Utc::now()).await
    }

    /// Claims the next available coupon for `identity` as of `now`.
    pub async fn claim_at(
        &self,
        identity: Identity,
        now: DateTime<Utc>,
    ) -> Result<ClaimOutcome, AppError> {
        if identity.address.trim().is_empty() || identity.fingerprint.trim().is_empty() {
            return Err(AppError::validation(
                "Identity requires a non-empty address and fingerprint",
            ));
        }
        if identity.has_unknown_address() {
            debug!(fingerprint = %identity.fingerprint, "Claim with unresolved address");
        }

        // Detached: dropping the caller must not cut a commit in half.
        let this = self.clone();
        tokio::spawn(async move { this.allocate(identity, now).await })
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Claim task failed", e))?
    }

    /// Cooldown check, selection and commit, all under the pool lock.
    async fn allocate(
        &self,
        identity: Identity,
        now: DateTime<Utc>,
    ) -> Result<ClaimOutcome, AppError> {
        let _guard = self.lock.acquire().await;

        let history = self.store.load_claims().await?;
        if let Some(hours) = self
            .policy
            .hours_remaining(&identity, &history, self.cooldown, now)
        {
            debug!(
                address = %identity.address,
                fingerprint = %identity.fingerprint,
                hours_remaining = hours,
                "Claim rejected: cooldown active"
            );
            return Ok(ClaimOutcome::cooldown(hours));
        }

        let previous = self.store.load_coupons().await?;
        let Some(index) = previous.iter().position(|c| c.is_available()) else {
            debug!(address = %identity.address, "Claim rejected: no coupons available");
            return Ok(ClaimOutcome::exhausted());
        };

        let mut updated = previous.clone();
        let coupon = &mut updated[index];
        if !coupon.redeem(identity.clone(), now) {
            return Err(AppError::internal(format!(
                "Coupon {} was selected but is already redeemed",
                coupon.id
            )));
        }
        let coupon = coupon.clone();
        let record = ClaimRecord::for_coupon(&coupon, identity, now);

        if let Err(err) = self.store.commit_claim(&previous, &updated, &record).await {
            warn!(coupon_id = %coupon.id, error = %err, "Failed to persist claim");
            return Err(err);
        }

        info!(
            coupon_id = %coupon.id,
            code = %coupon.code,
            claim_id = %record.id,
            address = %record.identity.address,
            "Coupon claimed"
        );
        Ok(ClaimOutcome::claimed(coupon))
    }
}
