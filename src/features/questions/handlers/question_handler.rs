use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::questions::dtos::{
    DeletedResponseDto, QuestionListResponseDto, QuestionPageResponseDto,
    QuestionsPostResponseDto, QuestionsRequestDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{AddedResponse, ErrorResponse, PaginationQuery};

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PaginationQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionPageResponseDto),
        (status = 404, description = "Page is empty", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
) -> Result<Json<QuestionPageResponseDto>> {
    let page = service.list_page(&pagination).await?;
    Ok(Json(page))
}

/// Search questions or create one
///
/// A body carrying `searchTerm` runs a case-insensitive substring search over
/// question text. Any other body must describe a new question.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = QuestionsRequestDto,
    responses(
        (status = 200, description = "Search results or id of the new question", body = QuestionsPostResponseDto),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_or_create_question(
    State(service): State<Arc<QuestionService>>,
    AppJson(body): AppJson<QuestionsRequestDto>,
) -> Result<Json<QuestionsPostResponseDto>> {
    match body {
        QuestionsRequestDto::Search(search) => {
            let results = service.search(&search.search_term).await?;
            Ok(Json(QuestionsPostResponseDto::Search(results)))
        }
        QuestionsRequestDto::Create(dto) => {
            dto.validate()
                .map_err(|e| AppError::BadRequest(e.to_string()))?;

            let id = service.create(dto).await?;
            Ok(Json(QuestionsPostResponseDto::Added(AddedResponse::new(id))))
        }
    }
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeletedResponseDto),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Question could not be deleted", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DeletedResponseDto>> {
    let deleted = service.delete(id).await?;
    Ok(Json(DeletedResponseDto {
        success: true,
        deleted,
    }))
}

/// List every question in a category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Questions in the category, possibly none", body = QuestionListResponseDto),
    ),
    tag = "questions"
)]
pub async fn list_questions_by_category(
    State(service): State<Arc<QuestionService>>,
    AppPath(category_id): AppPath<i32>,
) -> Result<Json<QuestionListResponseDto>> {
    let questions = service.list_by_category(category_id).await?;
    Ok(Json(questions))
}
