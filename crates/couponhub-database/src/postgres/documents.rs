//! PostgreSQL document store.
//!
//! Each collection is one row of the `documents` table with the whole
//! ordered sequence stored as a JSONB array.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use sqlx::PgPool;
use tracing::info;

use couponhub_core::error::{AppError, ErrorKind};
use couponhub_core::result::AppResult;
use couponhub_entity::claim::ClaimRecord;
use couponhub_entity::coupon::Coupon;

use crate::store::{CLAIMS_KEY, COUPONS_KEY, CouponStore};

const UPSERT_DOCUMENT: &str = "INSERT INTO documents (key, body, updated_at) VALUES ($1, $2, NOW()) \
     ON CONFLICT (key) DO UPDATE SET body = EXCLUDED.body, updated_at = NOW()";

const APPEND_TO_DOCUMENT: &str = "INSERT INTO documents (key, body, updated_at) \
     VALUES ($1, jsonb_build_array($2::jsonb), NOW()) \
     ON CONFLICT (key) DO UPDATE SET body = documents.body || EXCLUDED.body, updated_at = NOW()";

/// Store backed by the `documents` table.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a new store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn read_document<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<Vec<T>>> {
        let body: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT body FROM documents WHERE key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        format!("Failed to read document '{key}'"),
                        e,
                    )
                })?;

        body.map(serde_json::from_value)
            .transpose()
            .map_err(AppError::from)
    }
}

#[async_trait]
impl CouponStore for PgStore {
    fn provider(&self) -> &'static str {
        "postgres"
    }

    async fn load_coupons(&self) -> AppResult<Vec<Coupon>> {
        Ok(self.read_document(COUPONS_KEY).await?.unwrap_or_default())
    }

    async fn save_coupons(&self, coupons: &[Coupon]) -> AppResult<()> {
        let body = serde_json::to_value(coupons)?;
        sqlx::query(UPSERT_DOCUMENT)
            .bind(COUPONS_KEY)
            .bind(body)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save coupons", e))?;
        Ok(())
    }

    async fn load_claims(&self) -> AppResult<Vec<ClaimRecord>> {
        Ok(self.read_document(CLAIMS_KEY).await?.unwrap_or_default())
    }

    async fn append_claim(&self, claim: &ClaimRecord) -> AppResult<()> {
        let body = serde_json::to_value(claim)?;
        sqlx::query(APPEND_TO_DOCUMENT)
            .bind(CLAIMS_KEY)
            .bind(body)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append claim", e))?;
        Ok(())
    }

    async fn is_initialized(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM documents WHERE key = $1)")
            .bind(COUPONS_KEY)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check coupon document", e)
            })
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    /// Writes the redemption and the claim record in one transaction.
    async fn commit_claim(
        &self,
        _previous: &[Coupon],
        updated: &[Coupon],
        claim: &ClaimRecord,
    ) -> AppResult<()> {
        let coupons = serde_json::to_value(updated)?;
        let record = serde_json::to_value(claim)?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(UPSERT_DOCUMENT)
            .bind(COUPONS_KEY)
            .bind(coupons)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save coupons", e))?;

        sqlx::query(APPEND_TO_DOCUMENT)
            .bind(CLAIMS_KEY)
            .bind(record)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append claim", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit claim", e)
        })?;

        info!(coupon_id = %claim.coupon_id, claim_id = %claim.id, "Claim committed");
        Ok(())
    }
}
