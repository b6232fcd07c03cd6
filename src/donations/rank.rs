use serde::Serialize;

use crate::auth::repo_types::User;
use crate::donations::dto::LeaderboardEntry;

pub const SWAG_KIT_THRESHOLD: i64 = 1000;
pub const LINKEDIN_SHOUTOUT_THRESHOLD: i64 = 2500;
pub const CERTIFICATE_GOODIES_THRESHOLD: i64 = 5000;

const THRESHOLDS: [i64; 3] = [
    SWAG_KIT_THRESHOLD,
    LINKEDIN_SHOUTOUT_THRESHOLD,
    CERTIFICATE_GOODIES_THRESHOLD,
];

/// Reward unlocked at or above each fixed donation threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RewardTier {
    None,
    SwagKit,
    LinkedInShoutout,
    #[serde(rename = "Certificate+Goodies")]
    CertificateGoodies,
}

/// Orders users descending by donation total and assigns dense 1-based
/// ranks. The sort is stable, so equal totals keep their input order.
/// Output is truncated to `limit` entries.
pub fn rank(users: &[User], limit: usize) -> Vec<LeaderboardEntry> {
    let mut ordered: Vec<&User> = users.iter().collect();
    ordered.sort_by_key(|u| std::cmp::Reverse(u.donations_raised));
    ordered
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, u)| LeaderboardEntry {
            rank: (i + 1) as u32,
            name: u.name.clone(),
            referral_code: u.referral_code.clone(),
            donations_raised: u.donations_raised,
        })
        .collect()
}

pub fn tier(amount: i64) -> RewardTier {
    if amount >= CERTIFICATE_GOODIES_THRESHOLD {
        RewardTier::CertificateGoodies
    } else if amount >= LINKEDIN_SHOUTOUT_THRESHOLD {
        RewardTier::LinkedInShoutout
    } else if amount >= SWAG_KIT_THRESHOLD {
        RewardTier::SwagKit
    } else {
        RewardTier::None
    }
}

/// Distance to the smallest unmet threshold; None once all are unlocked.
pub fn next_reward_gap(amount: i64) -> Option<i64> {
    THRESHOLDS
        .into_iter()
        .find(|t| amount < *t)
        .map(|t| t - amount)
}
