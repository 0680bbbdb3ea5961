//! Trivia questions.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Ten questions per page, with the category map |
//! | POST | `/questions` | Search by `searchTerm`, or create a question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | GET | `/categories/{id}/questions` | All questions in one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgQuestionRepository, QuestionRepository};
pub use services::QuestionService;
