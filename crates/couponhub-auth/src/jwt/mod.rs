//! Admin JWT issuance and validation.

pub mod claims;
pub mod codec;

pub use claims::AdminClaims;
pub use codec::{AdminToken, JwtCodec};
