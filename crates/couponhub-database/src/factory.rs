//! Builds the configured store backend.

use std::sync::Arc;

use tracing::info;

use couponhub_core::config::{AppConfig, StoreProvider};
use couponhub_core::result::AppResult;

use crate::file::FileStore;
use crate::memory::MemoryStore;
use crate::postgres::{self, PgStore};
use crate::seed;
use crate::store::CouponStore;

/// Connects the backend selected by `config.store.provider`.
///
/// PostgreSQL migrations run on connect. When `seed_defaults` is set, a
/// never-initialized pool receives the default coupons.
pub async fn connect_store(config: &AppConfig) -> AppResult<Arc<dyn CouponStore>> {
    info!(provider = %config.store.provider, "Initializing coupon store");

    let store: Arc<dyn CouponStore> = match config.store.provider {
        StoreProvider::Memory => Arc::new(MemoryStore::new()),
        StoreProvider::File => Arc::new(FileStore::open(&config.store.data_dir).await?),
        StoreProvider::Postgres => {
            let pool = postgres::connect_pool(&config.database).await?;
            postgres::migrate(&pool).await?;
            Arc::new(PgStore::new(pool))
        }
    };

    if config.store.seed_defaults {
        seed::seed_defaults(store.as_ref()).await?;
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_is_seeded() {
        let config = AppConfig::default();
        let store = connect_store(&config).await.expect("connect");
        assert_eq!(store.provider(), "memory");
        assert_eq!(store.load_coupons().await.expect("load").len(), 3);
    }

    #[tokio::test]
    async fn test_file_store_without_seeding() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = AppConfig::default();
        config.store.provider = StoreProvider::File;
        config.store.data_dir = dir.path().to_string_lossy().into_owned();
        config.store.seed_defaults = false;

        let store = connect_store(&config).await.expect("connect");
        assert_eq!(store.provider(), "file");
        assert!(!store.is_initialized().await.expect("init"));
    }
}
