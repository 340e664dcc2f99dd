//! In-memory document store for development and tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use couponhub_core::result::AppResult;
use couponhub_entity::claim::ClaimRecord;
use couponhub_entity::coupon::Coupon;

use crate::store::CouponStore;

/// Both collections, guarded together.
#[derive(Debug, Default)]
struct Documents {
    /// `None` until the pool is first written.
    coupons: Option<Vec<Coupon>>,
    claims: Vec<ClaimRecord>,
}

/// In-memory store using a Tokio `RwLock`.
///
/// Suitable for single-node deployments and tests; contents are lost on
/// restart. Cloning shares the same underlying documents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    docs: Arc<RwLock<Documents>>,
}

impl MemoryStore {
    /// Creates an empty, uninitialized store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `coupons` and `claims`.
    pub fn with_documents(coupons: Vec<Coupon>, claims: Vec<ClaimRecord>) -> Self {
        Self {
            docs: Arc::new(RwLock::new(Documents {
                coupons: Some(coupons),
                claims,
            })),
        }
    }
}

#[async_trait]
impl CouponStore for MemoryStore {
    fn provider(&self) -> &'static str {
        "memory"
    }

    async fn load_coupons(&self) -> AppResult<Vec<Coupon>> {
        Ok(self.docs.read().await.coupons.clone().unwrap_or_default())
    }

    async fn save_coupons(&self, coupons: &[Coupon]) -> AppResult<()> {
        self.docs.write().await.coupons = Some(coupons.to_vec());
        Ok(())
    }

    async fn load_claims(&self) -> AppResult<Vec<ClaimRecord>> {
        Ok(self.docs.read().await.claims.clone())
    }

    async fn append_claim(&self, claim: &ClaimRecord) -> AppResult<()> {
        self.docs.write().await.claims.push(claim.clone());
        Ok(())
    }

    async fn is_initialized(&self) -> AppResult<bool> {
        Ok(self.docs.read().await.coupons.is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn commit_claim(
        &self,
        _previous: &[Coupon],
        updated: &[Coupon],
        claim: &ClaimRecord,
    ) -> AppResult<()> {
        let mut docs = self.docs.write().await;
        docs.coupons = Some(updated.to_vec());
        docs.claims.push(claim.clone());
        Ok(())
    }
}
