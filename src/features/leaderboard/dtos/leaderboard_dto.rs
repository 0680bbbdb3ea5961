use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::leaderboard::models::LeaderboardEntry;
use crate::shared::deserializers::deserialize_lenient_i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntryDto {
    pub id: i32,
    pub player: String,
    pub score: i32,
}

impl From<LeaderboardEntry> for LeaderboardEntryDto {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            id: entry.id,
            player: entry.player,
            score: entry.score,
        }
    }
}

/// One page of the leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPageResponseDto {
    pub results: Vec<LeaderboardEntryDto>,
    /// Count of all entries, not just this page
    pub total_results: usize,
}

/// Request DTO for posting a score
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLeaderboardEntryDto {
    #[validate(
        length(max = 255, message = "Player must not exceed 255 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub player: String,

    /// Integer, or a string holding one
    #[serde(deserialize_with = "deserialize_lenient_i32")]
    pub score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_dto_accepts_numeric_string_score() {
        let dto: CreateLeaderboardEntryDto =
            serde_json::from_value(json!({"player": "ada", "score": "7"})).unwrap();
        assert_eq!(dto.score, 7);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_bad_input() {
        assert!(serde_json::from_value::<CreateLeaderboardEntryDto>(json!({"player": "ada"})).is_err());
        assert!(serde_json::from_value::<CreateLeaderboardEntryDto>(
            json!({"player": "ada", "score": "lots"})
        )
        .is_err());

        let blank: CreateLeaderboardEntryDto =
            serde_json::from_value(json!({"player": " ", "score": 1})).unwrap();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_page_uses_camel_case() {
        let page = LeaderboardPageResponseDto {
            results: vec![],
            total_results: 0,
        };
        assert_eq!(
            serde_json::to_value(page).unwrap(),
            json!({"results": [], "totalResults": 0})
        );
    }
}
