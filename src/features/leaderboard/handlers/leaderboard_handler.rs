use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::leaderboard::dtos::{CreateLeaderboardEntryDto, LeaderboardPageResponseDto};
use crate::features::leaderboard::services::LeaderboardService;
use crate::shared::types::{AddedResponse, ErrorResponse, PaginationQuery};

/// List leaderboard entries, best score first
#[utoipa::path(
    get,
    path = "/leaderboard",
    params(PaginationQuery),
    responses(
        (status = 200, description = "One page of the ranking, possibly empty", body = LeaderboardPageResponseDto),
    ),
    tag = "leaderboard"
)]
pub async fn list_leaderboard(
    State(service): State<Arc<LeaderboardService>>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
) -> Result<Json<LeaderboardPageResponseDto>> {
    let page = service.list_page(&pagination).await?;
    Ok(Json(page))
}

/// Post a score
#[utoipa::path(
    post,
    path = "/leaderboard",
    request_body = CreateLeaderboardEntryDto,
    responses(
        (status = 200, description = "Score recorded", body = AddedResponse),
        (status = 400, description = "Missing or invalid player or score", body = ErrorResponse)
    ),
    tag = "leaderboard"
)]
pub async fn create_leaderboard_entry(
    State(service): State<Arc<LeaderboardService>>,
    AppJson(dto): AppJson<CreateLeaderboardEntryDto>,
) -> Result<Json<AddedResponse>> {
    dto.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok(Json(AddedResponse::new(id)))
}
