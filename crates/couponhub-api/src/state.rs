//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use couponhub_auth::AdminGate;
use couponhub_core::config::AppConfig;
use couponhub_core::error::AppError;
use couponhub_database::CouponStore;
use couponhub_service::{ClaimService, CouponService, IdentityResolver, PoolLock};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Coupon and claim documents
    pub store: Arc<dyn CouponStore>,
    /// Coupon allocator
    pub claim_service: Arc<ClaimService>,
    /// Pool management
    pub coupon_service: Arc<CouponService>,
    /// Requester identity resolution
    pub identity_resolver: Arc<IdentityResolver>,
    /// Admin login and token validation
    pub admin_gate: Arc<AdminGate>,
    /// When the state was built
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Wires services over `store` from configuration.
    pub fn new(config: AppConfig, store: Arc<dyn CouponStore>) -> Result<Self, AppError> {
        let lock = PoolLock::new();
        let claim_service = ClaimService::new(Arc::clone(&store), lock.clone(), &config.claim);
        let coupon_service = CouponService::new(Arc::clone(&store), lock);
        let identity_resolver = IdentityResolver::from_config(&config.identity)?;
        let admin_gate = AdminGate::from_config(&config.auth);

        Ok(Self {
            config: Arc::new(config),
            store,
            claim_service: Arc::new(claim_service),
            coupon_service: Arc::new(coupon_service),
            identity_resolver: Arc::new(identity_resolver),
            admin_gate: Arc::new(admin_gate),
            started_at: Utc::now(),
        })
    }
}
