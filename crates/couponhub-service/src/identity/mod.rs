//! Requester identity resolution.

pub mod address;
pub mod fingerprint;
pub mod lookup;
pub mod resolver;

pub use address::RequestMetadata;
pub use fingerprint::ClientEnvironment;
pub use lookup::{HttpIpLookup, IpLookup};
pub use resolver::IdentityResolver;
