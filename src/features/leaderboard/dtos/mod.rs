mod leaderboard_dto;

pub use leaderboard_dto::{
    CreateLeaderboardEntryDto, LeaderboardEntryDto, LeaderboardPageResponseDto,
};
