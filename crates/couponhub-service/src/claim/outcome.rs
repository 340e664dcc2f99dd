//! Result of a claim attempt.

use serde::{Deserialize, Serialize};

use couponhub_entity::coupon::Coupon;

/// Business outcome of a claim.
///
/// Cooldown and an empty pool are ordinary outcomes, not errors; only
/// persistence failures surface as `AppError`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClaimOutcome {
    /// A coupon was redeemed for the requester.
    Claimed {
        /// The redeemed coupon.
        coupon: Coupon,
        /// Message shown to the requester.
        message: String,
    },
    /// The requester claimed too recently.
    CooldownActive {
        /// Whole hours left in the window, rounded up.
        hours_remaining: i64,
        /// Message shown to the requester.
        message: String,
    },
    /// No coupon is active and unredeemed.
    NoCouponsAvailable {
        /// Message shown to the requester.
        message: String,
    },
}

impl ClaimOutcome {
    pub(crate) fn claimed(coupon: Coupon) -> Self {
        let message = format!("Congratulations! Your coupon code is: {}", coupon.code);
        Self::Claimed { coupon, message }
    }

    pub(crate) fn cooldown(hours_remaining: i64) -> Self {
        Self::CooldownActive {
            hours_remaining,
            message: format!(
                "You've already claimed a coupon. Please try again in {hours_remaining} hours."
            ),
        }
    }

    pub(crate) fn exhausted() -> Self {
        Self::NoCouponsAvailable {
            message: "No coupons available at this time.".to_string(),
        }
    }

    /// Whether a coupon was handed out.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Claimed { .. })
    }

    /// The message to show the requester.
    pub fn message(&self) -> &str {
        match self {
            Self::Claimed { message, .. }
            | Self::CooldownActive { message, .. }
            | Self::NoCouponsAvailable { message } => message,
        }
    }

    /// The redeemed coupon, on success.
    pub fn coupon(&self) -> Option<&Coupon> {
        match self {
            Self::Claimed { coupon, .. } => Some(coupon),
            _ => None,
        }
    }

    /// Hours left in the cooldown window, when one is active.
    pub fn hours_remaining(&self) -> Option<i64> {
        match self {
            Self::CooldownActive {
                hours_remaining, ..
            } => Some(*hours_remaining),
            _ => None,
        }
    }
}
