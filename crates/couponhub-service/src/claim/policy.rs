//! Which earlier claims count against a requester.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use couponhub_entity::claim::ClaimRecord;
use couponhub_entity::identity::Identity;

const HOUR_MS: i64 = 60 * 60 * 1000;

/// Cooldown matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CooldownPolicy {
    /// A prior claim counts if its address OR its fingerprint matches.
    ///
    /// Users sharing a network address share a cooldown.
    #[default]
    AddressOrFingerprint,
}

impl CooldownPolicy {
    /// Whether `previous` was made by the same requester as `requester`.
    pub fn matches(&self, requester: &Identity, previous: &Identity) -> bool {
        match self {
            Self::AddressOrFingerprint => requester.overlaps(previous),
        }
    }

    /// The most recent matching claim in `history`.
    pub fn latest_match<'a>(
        &self,
        requester: &Identity,
        history: &'a [ClaimRecord],
    ) -> Option<&'a ClaimRecord> {
        history
            .iter()
            .filter(|record| self.matches(requester, &record.identity))
            .max_by_key(|record| record.claimed_at)
    }

    /// Hours left before `requester` may claim again, if any.
    ///
    /// The remainder is rounded up to whole hours.
    pub fn hours_remaining(
        &self,
        requester: &Identity,
        history: &[ClaimRecord],
        window: Duration,
        now: DateTime<Utc>,
    ) -> Option<i64> {
        let latest = self.latest_match(requester, history)?;
        let elapsed = now - latest.claimed_at;
        if elapsed >= window {
            return None;
        }

        let remaining_ms = (window - elapsed).num_milliseconds();
        Some((remaining_ms + HOUR_MS - 1).div_euclid(HOUR_MS))
    }
}

#[cfg(test)]
mod tests {
    use couponhub_entity::coupon::{Coupon, CreateCoupon};

    use super::*;

    fn record(address: &str, fingerprint: &str, at: DateTime<Utc>) -> ClaimRecord {
        let coupon = Coupon::create(
            CreateCoupon {
                code: "X".to_string(),
                description: "x".to_string(),
                is_active: true,
            },
            at,
        );
        ClaimRecord::for_coupon(&coupon, Identity::new(address, fingerprint), at)
    }

    #[test]
    fn test_latest_match_picks_newest_by_timestamp() {
        let t0 = Utc::now();
        let history = vec![
            record("1.1.1.1", "aa", t0 + Duration::hours(2)),
            record("2.2.2.2", "aa", t0),
            record("3.3.3.3", "bb", t0 + Duration::hours(5)),
        ];
        let requester = Identity::new("1.1.1.1", "aa");
        let latest = CooldownPolicy::default()
            .latest_match(&requester, &history)
            .expect("match");
        assert_eq!(latest.claimed_at, t0 + Duration::hours(2));
    }

    #[test]
    fn test_hours_rounded_up() {
        let t0 = Utc::now();
        let history = vec![record("1.1.1.1", "aa", t0)];
        let requester = Identity::new("9.9.9.9", "aa");
        let policy = CooldownPolicy::AddressOrFingerprint;
        let window = Duration::hours(24);

        assert_eq!(policy.hours_remaining(&requester, &history, window, t0), Some(24));
        assert_eq!(
            policy.hours_remaining(&requester, &history, window, t0 + Duration::minutes(30)),
            Some(24)
        );
        assert_eq!(
            policy.hours_remaining(&requester, &history, window, t0 + Duration::hours(1)),
            Some(23)
        );
        assert_eq!(
            policy.hours_remaining(
                &requester,
                &history,
                window,
                t0 + Duration::hours(23) + Duration::minutes(59)
            ),
            Some(1)
        );
        assert_eq!(
            policy.hours_remaining(&requester, &history, window, t0 + Duration::hours(24)),
            None
        );
    }

    #[test]
    fn test_unrelated_history_ignored() {
        let t0 = Utc::now();
        let history = vec![record("1.1.1.1", "aa", t0)];
        let requester = Identity::new("2.2.2.2", "bb");
        assert_eq!(
            CooldownPolicy::default().hours_remaining(&requester, &history, Duration::hours(24), t0),
            None
        );
    }
}
