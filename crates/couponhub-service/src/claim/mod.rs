//! Coupon claim allocation.

pub mod allocator;
pub mod outcome;
pub mod policy;

pub use allocator::ClaimService;
pub use outcome::ClaimOutcome;
pub use policy::CooldownPolicy;
