//! Admin handlers. Everything except login requires an [`AdminSession`](crate::extractors::AdminSession).

pub mod auth;
pub mod claims;
pub mod coupons;
pub mod stats;
