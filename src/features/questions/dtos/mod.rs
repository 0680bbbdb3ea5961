mod question_dto;

pub use question_dto::{
    CreateQuestionDto, DeletedResponseDto, QuestionDto, QuestionListResponseDto,
    QuestionPageResponseDto, QuestionsPostResponseDto, QuestionsRequestDto, SearchQuestionsDto,
};
