mod quiz_dto;

pub use quiz_dto::{QuizCategory, QuizRequestDto, QuizResponseDto};
