//! # couponhub-database
//!
//! The [`CouponStore`] document-store interface used by the allocator and
//! pool management, with in-memory, JSON-file, and PostgreSQL backends.
//!
//! Each backend keeps two ordered collections: the coupon pool (in
//! creation order) and the append-only claim history.

pub mod factory;
pub mod file;
pub mod memory;
pub mod postgres;
pub mod seed;
pub mod store;

pub use factory::connect_store;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use postgres::{PgStore, connect_pool, redact_url};
pub use store::{CLAIMS_KEY, COUPONS_KEY, CouponStore};
