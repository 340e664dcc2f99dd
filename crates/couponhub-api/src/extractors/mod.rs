//! Custom Axum extractors.

pub mod admin;
pub mod json;
pub mod metadata;
pub mod path;

pub use admin::AdminSession;
pub use json::ValidatedJson;
pub use metadata::ClientMetadata;
pub use path::PathParam;
