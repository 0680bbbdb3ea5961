use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Draw the next quiz question
///
/// Returns `{"question": null}` once every eligible question has been asked.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "A random unasked question, or null", body = QuizResponseDto),
        (status = 400, description = "Missing previous_questions or quiz_category", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn next_quiz_question(
    State(service): State<Arc<QuizService>>,
    AppJson(request): AppJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    let question = service.next_question(request).await?;
    Ok(Json(QuizResponseDto { question }))
}
