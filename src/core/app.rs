use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit, http::StatusCode, middleware::from_fn_with_state, routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::error::AppError;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::categories::{
    routes as categories_routes, CategoryRepository, CategoryService, PgCategoryRepository,
};
use crate::features::leaderboard::{
    routes as leaderboard_routes, LeaderboardRepository, LeaderboardService,
    PgLeaderboardRepository,
};
use crate::features::questions::{
    routes as questions_routes, PgQuestionRepository, QuestionRepository, QuestionService,
};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};

/// Every feature service, wired to one set of repositories
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub questions: Arc<QuestionService>,
    pub quizzes: Arc<QuizService>,
    pub leaderboard: Arc<LeaderboardService>,
}

impl AppServices {
    /// Services backed by PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self::from_repositories(
            Arc::new(PgCategoryRepository::new(pool.clone())),
            Arc::new(PgQuestionRepository::new(pool.clone())),
            Arc::new(PgLeaderboardRepository::new(pool)),
        )
    }

    pub fn from_repositories(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
        leaderboard: Arc<dyn LeaderboardRepository>,
    ) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(Arc::clone(&categories))),
            questions: Arc::new(QuestionService::new(Arc::clone(&questions), categories)),
            quizzes: Arc::new(QuizService::new(questions)),
            leaderboard: Arc::new(LeaderboardService::new(leaderboard)),
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> AppError {
    AppError::NotFound("No route matched".to_string())
}

/// API routes plus health check and the JSON 404 fallback
pub fn api_routes(services: &AppServices, max_request_body_size: usize) -> Router {
    Router::new()
        .merge(categories_routes::routes(Arc::clone(&services.categories)))
        .merge(questions_routes::routes(Arc::clone(&services.questions)))
        .merge(quizzes_routes::routes(Arc::clone(&services.quizzes)))
        .merge(leaderboard_routes::routes(Arc::clone(&services.leaderboard)))
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_request_body_size))
}

/// Swagger UI and the OpenAPI document, behind basic auth when credentials are set
fn docs_routes(config: &Config) -> Router {
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    }
    .modify(&mut openapi);

    let docs = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    match config.swagger.credentials() {
        Some(credentials) => {
            tracing::info!("Swagger UI basic auth enabled");
            docs.layer(from_fn_with_state(
                Arc::new(credentials),
                middleware::basic_auth,
            ))
        }
        None => {
            tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
            docs
        }
    }
}

/// The complete application: docs, API, CORS, request ids and request tracing
pub fn build_app(config: &Config, services: &AppServices) -> Router {
    Router::new()
        .merge(docs_routes(config))
        .merge(api_routes(services, config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Outermost, so the span and the response both see the id
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
