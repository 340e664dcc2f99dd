//! # couponhub-service
//!
//! Business logic service layer for CouponHub. The claim allocator and
//! pool management orchestrate a [`CouponStore`](couponhub_database::CouponStore);
//! the identity resolver turns request metadata into an [`Identity`](couponhub_entity::identity::Identity).
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod claim;
pub mod coupon;
pub mod identity;
pub mod lock;

pub use claim::{ClaimOutcome, ClaimService, CooldownPolicy};
pub use coupon::CouponService;
pub use identity::{
    ClientEnvironment, HttpIpLookup, IdentityResolver, IpLookup, RequestMetadata,
};
pub use lock::PoolLock;
