use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    state::AppState,
};

use super::dto::{LeaderboardEntry, UpdateDonationsRequest, UpdateDonationsResponse};
use super::{rank, repo};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/leaderboard", get(get_leaderboard))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/donations", put(update_donations))
}

#[instrument(skip(state))]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let limit = state.config.leaderboard_top_n;
    let users = repo::list_top_by_donations(&state.db, limit).await?;
    Ok(Json(rank::rank(&users, limit as usize)))
}

#[instrument(skip(state, payload))]
pub async fn update_donations(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateDonationsRequest>,
) -> Result<Json<UpdateDonationsResponse>, ApiError> {
    if payload.amount < 0 {
        warn!(user_id = %user_id, amount = payload.amount, "negative donation update");
        return Err(ApiError::Validation("Amount must be non-negative".into()));
    }

    let donations_raised = repo::increment_donations(&state.db, user_id, payload.amount)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    info!(user_id = %user_id, donations_raised, "donations updated");
    Ok(Json(UpdateDonationsResponse { donations_raised }))
}
