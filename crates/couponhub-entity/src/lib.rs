//! # couponhub-entity
//!
//! Domain entity models for CouponHub. Every struct in this crate is a
//! record in the coupon pool or claim history documents, or a value object
//! embedded in them. All entities derive `Debug`, `Clone`, `Serialize`,
//! and `Deserialize` and use the camelCase field names of the stored
//! documents.

pub mod claim;
pub mod coupon;
pub mod identity;
