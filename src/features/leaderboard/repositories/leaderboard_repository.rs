use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::leaderboard::models::LeaderboardEntry;

#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// All entries, highest score first, ties broken by ascending id
    async fn list_by_score(&self) -> Result<Vec<LeaderboardEntry>, sqlx::Error>;

    async fn create(&self, player: &str, score: i32) -> Result<LeaderboardEntry, sqlx::Error>;
}

pub struct PgLeaderboardRepository {
    pool: PgPool,
}

impl PgLeaderboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeaderboardRepository for PgLeaderboardRepository {
    async fn list_by_score(&self) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardEntry>(
            r#"SELECT id, player, score FROM leaderboard ORDER BY score DESC, id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn create(&self, player: &str, score: i32) -> Result<LeaderboardEntry, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            INSERT INTO leaderboard (player, score)
            VALUES ($1, $2)
            RETURNING id, player, score
            "#,
        )
        .bind(player)
        .bind(score)
        .fetch_one(&self.pool)
        .await
    }
}
