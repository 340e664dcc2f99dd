//! Default coupon pool for fresh installations.

use chrono::{DateTime, Utc};
use tracing::info;

use couponhub_core::result::AppResult;
use couponhub_entity::coupon::{Coupon, CreateCoupon};

use crate::store::CouponStore;

/// Code and description of each default coupon, in creation order.
pub const DEFAULT_COUPONS: [(&str, &str); 3] = [
    ("WELCOME10", "10% off your first purchase"),
    ("SPRING25", "25% off spring collection"),
    ("FREESHIP", "Free shipping on orders over $50"),
];

/// Builds the default pool, all active.
pub fn default_coupons(now: DateTime<Utc>) -> Vec<Coupon> {
    DEFAULT_COUPONS
        .iter()
        .map(|(code, description)| {
            Coupon::create(
                CreateCoupon {
                    code: code.to_string(),
                    description: description.to_string(),
                    is_active: true,
                },
                now,
            )
        })
        .collect()
}

/// Writes the default pool if the store has never held one.
///
/// Returns `true` when the defaults were written.
pub async fn seed_defaults(store: &dyn CouponStore) -> AppResult<bool> {
    if store.is_initialized().await? {
        return Ok(false);
    }

    let coupons = default_coupons(Utc::now());
    store.save_coupons(&coupons).await?;
    info!(
        provider = store.provider(),
        count = coupons.len(),
        "Seeded default coupons"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[tokio::test]
    async fn test_seeds_once() {
        let store = MemoryStore::new();
        assert!(seed_defaults(&store).await.expect("seed"));
        assert!(!seed_defaults(&store).await.expect("seed again"));

        let codes: Vec<String> = store
            .load_coupons()
            .await
            .expect("load")
            .into_iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, vec!["WELCOME10", "SPRING25", "FREESHIP"]);
    }

    #[tokio::test]
    async fn test_does_not_reseed_emptied_pool() {
        let store = MemoryStore::with_documents(Vec::new(), Vec::new());
        assert!(!seed_defaults(&store).await.expect("seed"));
        assert!(store.load_coupons().await.expect("load").is_empty());
    }
}
