use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Public message for the error body; details stay in the logs
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Database(_) | AppError::Internal(_) => "Internal server error",
            AppError::NotFound(_) => "The requested resource was not found.",
            AppError::BadRequest(_) => "Bad request",
            AppError::Unprocessable(_) => "Your request was unprocessable.",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {:?}", e),
            AppError::Internal(ref msg) => tracing::error!("Internal error: {}", msg),
            AppError::Unprocessable(ref msg) => tracing::warn!("Unprocessable: {}", msg),
            AppError::BadRequest(ref msg) => tracing::debug!("Bad request: {}", msg),
            AppError::NotFound(ref msg) => tracing::debug!("Not found: {}", msg),
        }

        let status = self.status();
        let body = Json(ErrorResponse {
            error: status.as_u16(),
            message: self.public_message().to_string(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
