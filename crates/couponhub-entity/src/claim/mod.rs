//! Claim history entities.

pub mod model;

pub use model::ClaimRecord;
