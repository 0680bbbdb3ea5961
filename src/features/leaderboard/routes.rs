use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::leaderboard::handlers;
use crate::features::leaderboard::services::LeaderboardService;

/// Create routes for the leaderboard feature
pub fn routes(service: Arc<LeaderboardService>) -> Router {
    Router::new()
        .route(
            "/leaderboard",
            get(handlers::list_leaderboard).post(handlers::create_leaderboard_entry),
        )
        .with_state(service)
}
