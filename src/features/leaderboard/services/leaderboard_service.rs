use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::leaderboard::dtos::{CreateLeaderboardEntryDto, LeaderboardPageResponseDto};
use crate::features::leaderboard::repositories::LeaderboardRepository;
use crate::shared::types::PaginationQuery;

pub struct LeaderboardService {
    repo: Arc<dyn LeaderboardRepository>,
}

impl LeaderboardService {
    pub fn new(repo: Arc<dyn LeaderboardRepository>) -> Self {
        Self { repo }
    }

    /// One page of the ranking; a page past the end is returned empty
    pub async fn list_page(&self, pagination: &PaginationQuery) -> Result<LeaderboardPageResponseDto> {
        let entries = self.repo.list_by_score().await.map_err(|e| {
            tracing::error!("Failed to list leaderboard: {:?}", e);
            AppError::Database(e)
        })?;

        let total_results = entries.len();
        let results = pagination
            .paginate(entries)
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(LeaderboardPageResponseDto {
            results,
            total_results,
        })
    }

    /// Record a score and return the new entry id
    pub async fn create(&self, dto: CreateLeaderboardEntryDto) -> Result<i32> {
        let player = dto.player.trim();

        let entry = self.repo.create(player, dto.score).await.map_err(|e| {
            tracing::error!("Failed to create leaderboard entry: {:?}", e);
            AppError::BadRequest(format!("Score could not be stored: {}", e))
        })?;

        tracing::info!(
            "Leaderboard entry created: id={}, player={}, score={}",
            entry.id,
            entry.player,
            entry.score
        );

        Ok(entry.id)
    }
}
