//! # couponhub-auth
//!
//! Administrator authentication for CouponHub.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `jwt`: admin token issuance and validation
//! - `authenticator`: the pluggable credential check and the admin gate

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::{AdminGate, AdminPrincipal, Authenticator, CredentialAuthenticator};
pub use jwt::{AdminClaims, AdminToken, JwtCodec};
pub use password::PasswordHasher;
