use serde::{Deserialize, Serialize};

/// One leaderboard row; rank is the dense 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub referral_code: String,
    pub donations_raised: i64,
}

/// Request body for a donation-total update.
#[derive(Debug, Deserialize)]
pub struct UpdateDonationsRequest {
    pub amount: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDonationsResponse {
    pub donations_raised: i64,
}
