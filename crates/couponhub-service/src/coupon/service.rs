//! Coupon CRUD, claim history, and pool statistics.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use couponhub_core::error::AppError;
use couponhub_core::types::CouponId;
use couponhub_database::{CouponStore, seed};
use couponhub_entity::claim::ClaimRecord;
use couponhub_entity::coupon::{Coupon, CreateCoupon, PoolStats, UpdateCoupon};

use crate::lock::PoolLock;

/// Administrative operations over the coupon pool.
#[derive(Debug, Clone)]
pub struct CouponService {
    /// Coupon and claim documents.
    store: Arc<dyn CouponStore>,
    /// Pool-wide write lock, shared with the allocator.
    lock: PoolLock,
}

impl CouponService {
    /// Creates a new coupon service.
    pub fn new(store: Arc<dyn CouponStore>, lock: PoolLock) -> Self {
        Self { store, lock }
    }

    /// Lists every coupon in creation order.
    pub async fn list(&self) -> Result<Vec<Coupon>, AppError> {
        self.store.load_coupons().await
    }

    /// Gets one coupon.
    pub async fn get(&self, id: CouponId) -> Result<Coupon, AppError> {
        self.store
            .load_coupons()
            .await?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found(format!("Coupon {id} not found")))
    }

    /// Creates a coupon at the end of the pool.
    pub async fn create(&self, data: CreateCoupon) -> Result<Coupon, AppError> {
        self.create_at(data, Utc::now()).await
    }

    /// Creates a coupon stamped at `now`.
    pub async fn create_at(
        &self,
        data: CreateCoupon,
        now: DateTime<Utc>,
    ) -> Result<Coupon, AppError> {
        let data = CreateCoupon {
            code: required("code", &data.code)?,
            description: required("description", &data.description)?,
            is_active: data.is_active,
        };

        let _guard = self.lock.acquire().await;
        let mut coupons = self.store.load_coupons().await?;
        let coupon = Coupon::create(data, now);
        coupons.push(coupon.clone());
        self.store.save_coupons(&coupons).await?;

        info!(coupon_id = %coupon.id, code = %coupon.code, "Coupon created");
        Ok(coupon)
    }

    /// Merges `update` into the coupon with `id`.
    ///
    /// Returns `None` when no such coupon exists.
    pub async fn update(
        &self,
        id: CouponId,
        update: UpdateCoupon,
    ) -> Result<Option<Coupon>, AppError> {
        let update = UpdateCoupon {
            code: update.code.map(|c| required("code", &c)).transpose()?,
            description: update
                .description
                .map(|d| required("description", &d))
                .transpose()?,
            is_active: update.is_active,
        };

        self.modify(id, |coupon, now| {
            coupon.apply(update, now);
            Ok(())
        })
        .await
    }

    /// Flips the active flag of the coupon with `id`.
    ///
    /// Redeemed coupons are final and cannot be toggled.
    pub async fn toggle_active(&self, id: CouponId) -> Result<Option<Coupon>, AppError> {
        self.modify(id, |coupon, now| {
            if coupon.is_redeemed {
                return Err(AppError::conflict(format!(
                    "Coupon {} has been redeemed and cannot be toggled",
                    coupon.code
                )));
            }
            let is_active = !coupon.is_active;
            coupon.apply(
                UpdateCoupon {
                    is_active: Some(is_active),
                    ..Default::default()
                },
                now,
            );
            Ok(())
        })
        .await
    }

    /// Claim history, newest first.
    pub async fn claims(&self) -> Result<Vec<ClaimRecord>, AppError> {
        let mut claims = self.store.load_claims().await?;
        claims.reverse();
        claims.sort_by(|a, b| b.claimed_at.cmp(&a.claimed_at));
        Ok(claims)
    }

    /// Pool and history counts.
    pub async fn stats(&self) -> Result<PoolStats, AppError> {
        let coupons = self.store.load_coupons().await?;
        let claims = self.store.load_claims().await?;
        Ok(PoolStats::compute(&coupons, claims.len()))
    }

    /// Writes the default coupons if the pool was never initialized.
    pub async fn seed_defaults(&self) -> Result<bool, AppError> {
        let _guard = self.lock.acquire().await;
        seed::seed_defaults(self.store.as_ref()).await
    }

    async fn modify<F>(&self, id: CouponId, change: F) -> Result<Option<Coupon>, AppError>
    where
        F: FnOnce(&mut Coupon, DateTime<Utc>) -> Result<(), AppError>,
    {
        let _guard = self.lock.acquire().await;
        let mut coupons = self.store.load_coupons().await?;
        let Some(coupon) = coupons.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        change(coupon, Utc::now())?;
        let coupon = coupon.clone();
        self.store.save_coupons(&coupons).await?;

        info!(
            coupon_id = %coupon.id,
            code = %coupon.code,
            is_active = coupon.is_active,
            "Coupon updated"
        );
        Ok(Some(coupon))
    }
}

fn required(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("Coupon {field} must not be blank")));
    }
    Ok(trimmed.to_string())
}
