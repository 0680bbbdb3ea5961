use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{CategoriesResponseDto, CreateCategoryDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{AddedResponse, ErrorResponse};

/// List all categories
///
/// Returns categories as an id -> type mapping.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponseDto),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoriesResponseDto>> {
    let categories = service.list().await?;
    Ok(Json(CategoriesResponseDto { categories }))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 200, description = "Category created", body = AddedResponse),
        (status = 400, description = "Missing or invalid type", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<Json<AddedResponse>> {
    dto.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok(Json(AddedResponse::new(id)))
}
