//! JSON-file document store.
//!
//! Each collection lives in `<data_dir>/<key>.json` as a JSON array.
//! Writes go to a temporary sibling first and are renamed into place so a
//! crash never leaves a half-written document.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info};

use couponhub_core::error::{AppError, ErrorKind};
use couponhub_core::result::AppResult;
use couponhub_entity::claim::ClaimRecord;
use couponhub_entity::coupon::Coupon;

use crate::store::{CLAIMS_KEY, COUPONS_KEY, CouponStore};

/// Store backed by JSON files in a local directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    /// Serializes writers so appends never interleave.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Opens (and creates if needed) the data directory.
    pub async fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create data directory '{}'", root.display()),
                e,
            )
        })?;

        info!(path = %root.display(), "Opened file store");
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    /// Directory holding the documents.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    async fn read_document<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<Vec<T>>> {
        let path = self.document_path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let items = serde_json::from_slice(&bytes).map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Serialization,
                        format!("Corrupt document '{}'", path.display()),
                        e,
                    )
                })?;
                Ok(Some(items))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read '{}'", path.display()),
                e,
            )),
        }
    }

    async fn write_document<T: Serialize + Sync>(&self, key: &str, items: &[T]) -> AppResult<()> {
        let path = self.document_path(key);
        let tmp = self.root.join(format!(".{key}.json.tmp"));
        let bytes = serde_json::to_vec_pretty(items)?;

        tokio::fs::write(&tmp, &bytes).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write '{}'", tmp.display()),
                e,
            )
        })?;
        tokio::fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace '{}'", path.display()),
                e,
            )
        })?;

        debug!(key, count = items.len(), "Document written");
        Ok(())
    }
}

#[async_trait]
impl CouponStore for FileStore {
    fn provider(&self) -> &'static str {
        "file"
    }

    async fn load_coupons(&self) -> AppResult<Vec<Coupon>> {
        Ok(self.read_document(COUPONS_KEY).await?.unwrap_or_default())
    }

    async fn save_coupons(&self, coupons: &[Coupon]) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write_document(COUPONS_KEY, coupons).await
    }

    async fn load_claims(&self) -> AppResult<Vec<ClaimRecord>> {
        Ok(self.read_document(CLAIMS_KEY).await?.unwrap_or_default())
    }

    async fn append_claim(&self, claim: &ClaimRecord) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut claims: Vec<ClaimRecord> =
            self.read_document(CLAIMS_KEY).await?.unwrap_or_default();
        claims.push(claim.clone());
        self.write_document(CLAIMS_KEY, &claims).await
    }

    async fn is_initialized(&self) -> AppResult<bool> {
        Ok(tokio::fs::try_exists(self.document_path(COUPONS_KEY)).await?)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(tokio::fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }
}
