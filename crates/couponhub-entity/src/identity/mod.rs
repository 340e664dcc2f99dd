//! Requester identity value object.

pub mod model;

pub use model::{Identity, UNKNOWN_ADDRESS};
