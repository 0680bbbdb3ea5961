use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{to_category_map, CategoryMap, CreateCategoryDto};
use crate::features::categories::repositories::CategoryRepository;

/// Service for category operations
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// All categories as an id -> type map
    pub async fn list(&self) -> Result<CategoryMap> {
        let categories = self.repo.list().await.map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(to_category_map(categories))
    }

    /// Create a category and return its id
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<i32> {
        let category_type = dto.category_type.trim();

        let category = self.repo.create(category_type).await.map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::BadRequest(format!("Category could not be stored: {}", e))
        })?;

        tracing::info!(
            "Category created: id={}, type={}",
            category.id,
            category.category_type
        );

        Ok(category.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryStore;

    #[tokio::test]
    async fn test_create_trims_label() {
        let store = Arc::new(InMemoryStore::new());
        let service = CategoryService::new(store.clone());

        let id = service
            .create(CreateCategoryDto {
                category_type: "  Music ".to_string(),
            })
            .await
            .unwrap();

        let categories = service.list().await.unwrap();
        assert_eq!(categories.get(&id), Some(&"Music".to_string()));
    }

    #[tokio::test]
    async fn test_create_failure_is_bad_request() {
        let store = Arc::new(InMemoryStore::new());
        store.fail_writes(true);
        let service = CategoryService::new(store);

        let result = service
            .create(CreateCategoryDto {
                category_type: "Music".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
