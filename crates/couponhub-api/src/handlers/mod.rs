//! Route handlers.

pub mod admin;
pub mod claim;
pub mod health;
