//! Coupon pool entities.

pub mod model;
pub mod stats;

pub use model::{Coupon, CreateCoupon, UpdateCoupon};
pub use stats::PoolStats;
