use std::sync::Arc;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::QuestionDto;
use crate::features::questions::models::Question;
use crate::features::questions::QuestionRepository;
use crate::features::quizzes::dtos::{QuizCategory, QuizRequestDto};

/// Questions still eligible for the quiz.
///
/// With a category, drops questions whose id is in `previous`. With all
/// categories, drops questions whose *category* id is in `previous`; existing
/// clients depend on this, so it is kept as is.
pub fn quiz_candidates(
    questions: Vec<Question>,
    previous: &[i32],
    category: QuizCategory,
) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| match category {
            QuizCategory::Category(id) => q.category == id && !previous.contains(&q.id),
            QuizCategory::All => !previous.contains(&q.category),
        })
        .collect()
}

/// Uniform random pick
pub fn pick_question<'a, R: Rng + ?Sized>(
    candidates: &'a [Question],
    rng: &mut R,
) -> Option<&'a Question> {
    candidates.choose(rng)
}

/// Service for drawing quiz questions
pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Next question for the quiz, or `None` when nothing is left
    pub async fn next_question(&self, request: QuizRequestDto) -> Result<Option<QuestionDto>> {
        let pool = match request.quiz_category {
            QuizCategory::Category(id) => self.questions.list_by_category(id).await,
            QuizCategory::All => self.questions.list().await,
        }
        .map_err(|e| {
            tracing::error!("Failed to load quiz questions: {:?}", e);
            AppError::Database(e)
        })?;

        let candidates = quiz_candidates(pool, &request.previous_questions, request.quiz_category);
        let picked = pick_question(&candidates, &mut rand::rng()).cloned();

        tracing::debug!(
            "Quiz draw: category={:?}, previous={}, candidates={}, picked={:?}",
            request.quiz_category,
            request.previous_questions.len(),
            candidates.len(),
            picked.as_ref().map(|q| q.id)
        );

        Ok(picked.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn question(id: i32, category: i32) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
            category,
            difficulty: 1,
        }
    }

    fn pool() -> Vec<Question> {
        vec![
            question(1, 1),
            question(2, 1),
            question(3, 2),
            question(10, 6),
            question(11, 6),
        ]
    }

    fn ids(questions: &[Question]) -> Vec<i32> {
        questions.iter().map(|q| q.id).collect()
    }

    #[test]
    fn test_category_excludes_previous_question_ids() {
        let candidates = quiz_candidates(pool(), &[10], QuizCategory::Category(6));
        assert_eq!(ids(&candidates), vec![11]);
    }

    #[test]
    fn test_category_exhausted() {
        let candidates = quiz_candidates(pool(), &[10, 11], QuizCategory::Category(6));
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_all_categories_filters_by_category_membership() {
        // previous_questions = [1] removes category 1, not question 1
        let candidates = quiz_candidates(pool(), &[1], QuizCategory::All);
        assert_eq!(ids(&candidates), vec![3, 10, 11]);

        // question ids 10 and 11 are not category ids, so nothing is removed
        let candidates = quiz_candidates(pool(), &[10, 11], QuizCategory::All);
        assert_eq!(ids(&candidates), vec![1, 2, 3, 10, 11]);
    }

    #[test]
    fn test_pick_from_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_question(&[], &mut rng).is_none());
    }

    #[test]
    fn test_pick_reaches_every_candidate() {
        let mut rng = StdRng::seed_from_u64(42);
        let candidates = pool();
        let seen: HashSet<i32> = (0..500)
            .filter_map(|_| pick_question(&candidates, &mut rng).map(|q| q.id))
            .collect();
        assert_eq!(seen, HashSet::from([1, 2, 3, 10, 11]));
    }
}
