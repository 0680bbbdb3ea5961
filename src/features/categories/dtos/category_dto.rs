use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;

/// Categories keyed by id, the shape every endpoint uses for categories
pub type CategoryMap = BTreeMap<i32, String>;

pub fn to_category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect()
}

/// Response DTO for the category listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponseDto {
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    /// Category label, e.g. "Science"
    #[serde(rename = "type")]
    #[validate(
        length(max = 255, message = "Type must not exceed 255 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub category_type: String,
}
