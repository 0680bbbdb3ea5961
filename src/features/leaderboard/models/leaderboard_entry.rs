use sqlx::FromRow;

/// Row of the `leaderboard` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct LeaderboardEntry {
    pub id: i32,
    pub player: String,
    pub score: i32,
}
