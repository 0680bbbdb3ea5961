use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionDto;

/// Which questions a quiz draws from
///
/// Decoded from whatever clients put in `quiz_category`: any falsy JSON value
/// (null, `false`, `0`, `0.0`, `""`, `[]`, `{}`) means every category; an
/// integer or numeric string names one; an object such as
/// `{"type": "Science", "id": 1}` is read through its `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum QuizCategory {
    All,
    Category(i32),
}

impl TryFrom<Value> for QuizCategory {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null | Value::Bool(false) => Ok(Self::All),
            Value::Number(n) if n.as_f64() == Some(0.0) => Ok(Self::All),
            Value::Number(n) => match n.as_i64() {
                Some(id) => i32::try_from(id)
                    .map(Self::Category)
                    .map_err(|_| format!("quiz_category {} is out of range", id)),
                None => Err(format!("quiz_category {} is not an integer", n)),
            },
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Ok(Self::All)
                } else {
                    trimmed
                        .parse::<i32>()
                        .map(Self::Category)
                        .map_err(|_| format!("quiz_category {:?} is not a category id", s))
                }
            }
            Value::Array(items) if items.is_empty() => Ok(Self::All),
            Value::Object(fields) if fields.is_empty() => Ok(Self::All),
            Value::Object(mut fields) => match fields.remove("id") {
                Some(id) => Self::try_from(id),
                None => Err("quiz_category object has no id".to_string()),
            },
            other => Err(format!("Unsupported quiz_category {}", other)),
        }
    }
}

/// Request DTO for the next quiz question
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Ids of questions already asked in this quiz
    pub previous_questions: Vec<i32>,

    /// Category id, or null/0 for all categories
    #[schema(value_type = Option<i32>)]
    pub quiz_category: QuizCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    /// Null once the quiz has run out of questions
    pub question: Option<QuestionDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> Result<QuizCategory, String> {
        QuizCategory::try_from(value)
    }

    #[test]
    fn test_falsy_selectors_mean_all() {
        assert_eq!(decode(json!(null)), Ok(QuizCategory::All));
        assert_eq!(decode(json!(false)), Ok(QuizCategory::All));
        assert_eq!(decode(json!(0)), Ok(QuizCategory::All));
        assert_eq!(decode(json!("")), Ok(QuizCategory::All));
        assert_eq!(decode(json!(0.0)), Ok(QuizCategory::All));
        assert_eq!(decode(json!([])), Ok(QuizCategory::All));
        assert_eq!(decode(json!({})), Ok(QuizCategory::All));
        assert_eq!(
            decode(json!({"type": "click", "id": 0})),
            Ok(QuizCategory::All)
        );
    }

    #[test]
    fn test_category_selectors() {
        assert_eq!(decode(json!(6)), Ok(QuizCategory::Category(6)));
        assert_eq!(decode(json!("6")), Ok(QuizCategory::Category(6)));
        assert_eq!(decode(json!("0")), Ok(QuizCategory::Category(0)));
        assert_eq!(
            decode(json!({"type": "Sports", "id": "6"})),
            Ok(QuizCategory::Category(6))
        );
    }

    #[test]
    fn test_invalid_selectors() {
        assert!(decode(json!("sports")).is_err());
        assert!(decode(json!(1.5)).is_err());
        assert!(decode(json!([1])).is_err());
        assert!(decode(json!({"type": "Sports"})).is_err());
    }

    #[test]
    fn test_request_requires_both_fields() {
        assert!(serde_json::from_value::<QuizRequestDto>(json!({})).is_err());
        assert!(
            serde_json::from_value::<QuizRequestDto>(json!({"previous_questions": []})).is_err()
        );
        assert!(serde_json::from_value::<QuizRequestDto>(json!({"quiz_category": 1})).is_err());

        let request: QuizRequestDto =
            serde_json::from_value(json!({"previous_questions": [1, 2], "quiz_category": null}))
                .unwrap();
        assert_eq!(request.previous_questions, vec![1, 2]);
        assert_eq!(request.quiz_category, QuizCategory::All);
    }
}
