mod question_repository;

pub use question_repository::{PgQuestionRepository, QuestionRepository};
