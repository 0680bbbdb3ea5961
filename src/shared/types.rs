use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE, QUESTIONS_PER_PAGE};

/// Body of every error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub error: u16,
    pub message: String,
}

/// Returned by every create endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddedResponse {
    pub added: i32,
    pub success: bool,
}

impl AddedResponse {
    pub fn new(id: i32) -> Self {
        Self {
            added: id,
            success: true,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// `?page=N` query parameter shared by the paginated listings.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    #[param(minimum = 1)]
    pub page: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

/// Unparseable page values fall back to the default instead of rejecting the request
fn deserialize_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE))
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE }
    }
}

impl PaginationQuery {
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// Index of the first record on this page, `None` when the page can hold nothing
    pub fn offset(&self) -> Option<usize> {
        if self.page < 1 {
            return None;
        }
        usize::try_from(self.page - 1)
            .ok()
            .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    }

    /// Slice `[(page-1)*10, page*10)` out of the full list
    pub fn paginate<T>(&self, items: Vec<T>) -> Vec<T> {
        match self.offset() {
            Some(start) => items
                .into_iter()
                .skip(start)
                .take(QUESTIONS_PER_PAGE)
                .collect(),
            None => Vec::new(),
        }
    }
}
