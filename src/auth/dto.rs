use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo_types::User;
use crate::donations::rank::RewardTier;

/// Request body for signup.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after signup or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub donations_raised: i64,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            referral_code: user.referral_code,
            donations_raised: user.donations_raised,
        }
    }
}

/// Authenticated user's own view: progress plus the derived reward state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub donations_raised: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub joining_date: OffsetDateTime,
    pub reward_tier: RewardTier,
    pub next_reward_gap: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_serializes_camel_case() {
        let user = PublicUser {
            id: Uuid::new_v4(),
            name: "Test User".into(),
            email: "test@example.com".into(),
            referral_code: "testuser2025".into(),
            donations_raised: 1200,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("referralCode"));
        assert!(json.contains("donationsRaised"));
        assert!(json.contains("test@example.com"));
    }

    #[test]
    fn user_row_never_serializes_the_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Test User".into(),
            email: "test@example.com".into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$secret".into(),
            referral_code: "testuser2025".into(),
            donations_raised: 0,
            joining_date: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn dashboard_carries_reward_state() {
        let res = DashboardResponse {
            name: "Test User".into(),
            email: "test@example.com".into(),
            referral_code: "testuser2025".into(),
            donations_raised: 2600,
            joining_date: OffsetDateTime::UNIX_EPOCH,
            reward_tier: RewardTier::LinkedInShoutout,
            next_reward_gap: Some(2400),
        };
        let json = serde_json::to_string(&res).unwrap();
        assert!(json.contains("\"rewardTier\":\"LinkedInShoutout\""));
        assert!(json.contains("\"nextRewardGap\":2400"));
        assert!(json.contains("\"joiningDate\":\"1970-01-01T00:00:00Z\""));
    }
}
