use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::to_category_map;
use crate::features::categories::CategoryRepository;
use crate::features::questions::dtos::{
    CreateQuestionDto, QuestionListResponseDto, QuestionPageResponseDto,
};
use crate::features::questions::models::NewQuestion;
use crate::features::questions::repositories::QuestionRepository;
use crate::shared::types::PaginationQuery;

/// Service for listing, searching, adding and deleting questions
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
}

fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        tracing::error!("{}: {:?}", context, e);
        AppError::Database(e)
    }
}

impl QuestionService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// One page of questions plus the category map; an empty page is NotFound
    pub async fn list_page(&self, pagination: &PaginationQuery) -> Result<QuestionPageResponseDto> {
        let questions = self
            .questions
            .list()
            .await
            .map_err(db_error("Failed to list questions"))?;
        let categories = self
            .categories
            .list()
            .await
            .map_err(db_error("Failed to list categories"))?;

        let total_questions = questions.len();
        let page = pagination.paginate(questions);
        if page.is_empty() {
            return Err(AppError::NotFound(format!(
                "Question page {} is empty",
                pagination.page
            )));
        }

        Ok(QuestionPageResponseDto {
            questions: page.into_iter().map(Into::into).collect(),
            total_questions,
            categories: to_category_map(categories),
            current_category: None,
        })
    }

    pub async fn search(&self, term: &str) -> Result<QuestionListResponseDto> {
        let questions = self
            .questions
            .search(term)
            .await
            .map_err(db_error("Failed to search questions"))?;

        tracing::debug!("Search {:?} matched {} questions", term, questions.len());

        Ok(QuestionListResponseDto::from_questions(questions))
    }

    pub async fn list_by_category(&self, category_id: i32) -> Result<QuestionListResponseDto> {
        let questions = self
            .questions
            .list_by_category(category_id)
            .await
            .map_err(db_error("Failed to list questions by category"))?;

        Ok(QuestionListResponseDto::from_questions(questions))
    }

    /// Store a new question and return its id
    pub async fn create(&self, dto: CreateQuestionDto) -> Result<i32> {
        let new_question = NewQuestion::from(dto);

        let question = self.questions.create(&new_question).await.map_err(|e| {
            tracing::error!("Failed to create question: {:?}", e);
            AppError::BadRequest(format!("Question could not be stored: {}", e))
        })?;

        tracing::info!(
            "Question created: id={}, category={}, difficulty={}",
            question.id,
            question.category,
            question.difficulty
        );

        Ok(question.id)
    }

    /// Delete a question by id and return that id
    pub async fn delete(&self, id: i32) -> Result<i32> {
        let question = self
            .questions
            .find_by_id(id)
            .await
            .map_err(db_error("Failed to look up question"))?
            .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))?;

        let deleted = self.questions.delete(question.id).await.map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", id, e);
            AppError::Unprocessable(format!("Question {} could not be deleted: {}", id, e))
        })?;

        if !deleted {
            return Err(AppError::Unprocessable(format!(
                "Question {} disappeared before it could be deleted",
                id
            )));
        }

        tracing::info!("Question deleted: id={}", id);

        Ok(question.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{sample_question, InMemoryStore};

    fn service_with(store: &Arc<InMemoryStore>) -> QuestionService {
        QuestionService::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn test_list_page_counts_all_questions() {
        let store = Arc::new(InMemoryStore::with_questions(25, 3));
        let service = service_with(&store);

        let page = service.list_page(&PaginationQuery::new(2)).await.unwrap();

        assert_eq!(page.total_questions, 25);
        assert_eq!(page.questions.len(), 10);
        assert_eq!(page.questions[0].id, 11);
        assert_eq!(page.categories.len(), 3);
        assert_eq!(page.current_category, None);
    }

    #[tokio::test]
    async fn test_list_page_past_end_is_not_found() {
        let store = Arc::new(InMemoryStore::with_questions(5, 1));
        let service = service_with(&store);

        let result = service.list_page(&PaginationQuery::new(2)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let store = Arc::new(InMemoryStore::new());
        store.insert_question(sample_question("What movie won Best Picture?", 5));
        store.insert_question(sample_question("Which river is the longest?", 3));
        let service = service_with(&store);

        let found = service.search("MOVIE").await.unwrap();
        assert_eq!(found.total_questions, 1);
        assert_eq!(found.questions[0].question, "What movie won Best Picture?");

        let all = service.search("").await.unwrap();
        assert_eq!(all.total_questions, 2);
    }

    #[tokio::test]
    async fn test_delete_missing_question_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(&store);

        let result = service.delete(1000).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_failure_is_unprocessable() {
        let store = Arc::new(InMemoryStore::with_questions(1, 1));
        store.fail_writes(true);
        let service = service_with(&store);

        let result = service.delete(1).await;
        assert!(matches!(result, Err(AppError::Unprocessable(_))));
    }

    #[tokio::test]
    async fn test_delete_then_lookup_is_not_found() {
        let store = Arc::new(InMemoryStore::with_questions(2, 1));
        let service = service_with(&store);

        assert_eq!(service.delete(1).await.unwrap(), 1);
        assert!(matches!(service.delete(1).await, Err(AppError::NotFound(_))));
    }
}
