//! Claim allocation configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Rules applied by the coupon allocator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimConfig {
    /// Hours an identity must wait between successful claims.
    #[serde(default = "default_cooldown_hours")]
    pub cooldown_hours: u32,
}

impl ClaimConfig {
    /// The cooldown window as a duration.
    pub fn cooldown(&self) -> Duration {
        Duration::hours(i64::from(self.cooldown_hours))
    }
}

impl Default for ClaimConfig {
    fn default() -> Self {
        Self {
            cooldown_hours: default_cooldown_hours(),
        }
    }
}

fn default_cooldown_hours() -> u32 {
    24
}
