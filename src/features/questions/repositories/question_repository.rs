use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::questions::models::{NewQuestion, Question};

/// Persistence operations for questions
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions in ascending id order
    async fn list(&self) -> Result<Vec<Question>, sqlx::Error>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, sqlx::Error>;

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>, sqlx::Error>;

    /// Case-insensitive substring match on the question text
    async fn search(&self, term: &str) -> Result<Vec<Question>, sqlx::Error>;

    async fn create(&self, new_question: &NewQuestion) -> Result<Question, sqlx::Error>;

    /// Returns false when no row had that id
    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error>;
}

/// Turn a search term into an ILIKE pattern that matches it literally
pub fn substring_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn list(&self) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"SELECT id, question, answer, category, difficulty FROM questions ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(substring_pattern(term))
        .fetch_all(&self.pool)
        .await
    }

    async fn create(&self, new_question: &NewQuestion) -> Result<Question, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&new_question.question)
        .bind(&new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM questions WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_pattern_wraps_term() {
        assert_eq!(substring_pattern("title"), "%title%");
        assert_eq!(substring_pattern(""), "%%");
    }

    #[test]
    fn test_substring_pattern_escapes_wildcards() {
        assert_eq!(substring_pattern("100%"), r"%100\%%");
        assert_eq!(substring_pattern("a_b"), r"%a\_b%");
        assert_eq!(substring_pattern(r"c:\x"), r"%c:\\x%");
    }
}
