//! Core type definitions used across the CouponHub workspace.

pub mod id;

pub use id::*;
