mod leaderboard_repository;

pub use leaderboard_repository::{LeaderboardRepository, PgLeaderboardRepository};
