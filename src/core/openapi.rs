use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::leaderboard::{dtos as leaderboard_dtos, handlers as leaderboard_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::{AddedResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::search_or_create_question,
        questions_handlers::delete_question,
        questions_handlers::list_questions_by_category,
        // Quizzes
        quizzes_handlers::next_quiz_question,
        // Leaderboard
        leaderboard_handlers::list_leaderboard,
        leaderboard_handlers::create_leaderboard_entry,
    ),
    components(
        schemas(
            // Shared
            AddedResponse,
            ErrorResponse,
            // Categories
            categories_dtos::CategoriesResponseDto,
            categories_dtos::CreateCategoryDto,
            // Questions
            questions_dtos::QuestionDto,
            questions_dtos::QuestionPageResponseDto,
            questions_dtos::QuestionListResponseDto,
            questions_dtos::DeletedResponseDto,
            questions_dtos::SearchQuestionsDto,
            questions_dtos::CreateQuestionDto,
            questions_dtos::QuestionsRequestDto,
            questions_dtos::QuestionsPostResponseDto,
            // Quizzes
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizResponseDto,
            // Leaderboard
            leaderboard_dtos::LeaderboardEntryDto,
            leaderboard_dtos::LeaderboardPageResponseDto,
            leaderboard_dtos::CreateLeaderboardEntryDto,
        )
    ),
    tags(
        (name = "categories", description = "Question categories"),
        (name = "questions", description = "Listing, search, creation and deletion of questions"),
        (name = "quizzes", description = "Random quiz questions"),
        (name = "leaderboard", description = "Player scores"),
    )
)]
pub struct ApiDoc;

/// Overrides the document info with values from configuration
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
