use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::categories::models::Category;

/// Persistence operations for categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories in ascending id order
    async fn list(&self) -> Result<Vec<Category>, sqlx::Error>;

    async fn create(&self, category_type: &str) -> Result<Category, sqlx::Error>;
}

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(r#"SELECT id, type FROM categories ORDER BY id"#)
            .fetch_all(&self.pool)
            .await
    }

    async fn create(&self, category_type: &str) -> Result<Category, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (type)
            VALUES ($1)
            RETURNING id, type
            "#,
        )
        .bind(category_type)
        .fetch_one(&self.pool)
        .await
    }
}
