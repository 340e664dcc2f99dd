//! Coupon pool management for administrators.

pub mod service;

pub use service::CouponService;
