use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::dtos::CategoryMap;
use crate::features::questions::models::{NewQuestion, Question};
use crate::shared::deserializers::deserialize_lenient_i32;
use crate::shared::types::AddedResponse;

/// Formatted question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// One page of the question listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionPageResponseDto {
    pub questions: Vec<QuestionDto>,
    /// Count of all questions, not just this page
    pub total_questions: usize,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    /// Always null
    pub current_category: Option<i32>,
}

/// Unpaginated question list returned by search and category filtering
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponseDto {
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    /// Always null
    pub current_category: Option<i32>,
}

impl QuestionListResponseDto {
    pub fn from_questions(questions: Vec<Question>) -> Self {
        let questions: Vec<QuestionDto> = questions.into_iter().map(Into::into).collect();
        Self {
            total_questions: questions.len(),
            questions,
            current_category: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponseDto {
    pub success: bool,
    pub deleted: i32,
}

/// Search mode body for `POST /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    /// Substring to look for; empty matches everything
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Create mode body for `POST /questions`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(custom(function = "crate::shared::validation::validate_not_blank"))]
    pub question: String,

    #[validate(custom(function = "crate::shared::validation::validate_not_blank"))]
    pub answer: String,

    /// Integer, or a string holding one
    #[serde(deserialize_with = "deserialize_lenient_i32")]
    pub difficulty: i32,

    /// Category id, integer or a string holding one
    #[serde(deserialize_with = "deserialize_lenient_i32")]
    pub category: i32,
}

impl From<CreateQuestionDto> for NewQuestion {
    fn from(dto: CreateQuestionDto) -> Self {
        Self {
            question: dto.question,
            answer: dto.answer,
            category: dto.category,
            difficulty: dto.difficulty,
        }
    }
}

/// `POST /questions` searches when `searchTerm` is present and non-null, and creates otherwise
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum QuestionsRequestDto {
    Search(SearchQuestionsDto),
    Create(CreateQuestionDto),
}

impl<'de> Deserialize<'de> for QuestionsRequestDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut body = Map::<String, Value>::deserialize(deserializer)?;

        // A scalar term is searched as text; the other fields are ignored
        let search_term = match body.remove("searchTerm") {
            None | Some(Value::Null) => None,
            Some(Value::String(term)) => Some(term),
            Some(term @ (Value::Number(_) | Value::Bool(_))) => Some(term.to_string()),
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "searchTerm must be a string, got {}",
                    other
                )))
            }
        };

        match search_term {
            Some(search_term) => Ok(Self::Search(SearchQuestionsDto { search_term })),
            None => CreateQuestionDto::deserialize(Value::Object(body))
                .map(Self::Create)
                .map_err(de::Error::custom),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum QuestionsPostResponseDto {
    Search(QuestionListResponseDto),
    Added(AddedResponse),
}
