use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use fake::faker::lorem::en::Word;
use fake::Fake;

use crate::core::app::{api_routes, AppServices};
use crate::features::categories::models::Category;
use crate::features::categories::CategoryRepository;
use crate::features::leaderboard::models::LeaderboardEntry;
use crate::features::leaderboard::LeaderboardRepository;
use crate::features::questions::models::{NewQuestion, Question};
use crate::features::questions::QuestionRepository;

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    leaderboard: Vec<LeaderboardEntry>,
    category_seq: i32,
    question_seq: i32,
    leaderboard_seq: i32,
}

/// Repository fake backing all three tables with plain vectors.
///
/// Ids come from per-table sequences and are never reused, like `SERIAL`.
/// With `fail_writes(true)` every insert and delete returns a pool error.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    fail_writes: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `categories` categories and `count` questions spread round-robin over them
    pub fn with_questions(count: i32, categories: i32) -> Self {
        let store = Self::new();
        for id in 1..=categories {
            store.insert_category(&format!("Category {}", id));
        }
        for i in 1..=count {
            let category = if categories > 0 { (i - 1) % categories + 1 } else { 1 };
            store.insert_question(sample_question(&format!("Question {}", i), category));
        }
        store
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn insert_category(&self, category_type: &str) -> Category {
        let mut tables = self.tables.lock().unwrap();
        tables.category_seq += 1;
        let category = Category {
            id: tables.category_seq,
            category_type: category_type.to_string(),
        };
        tables.categories.push(category.clone());
        category
    }

    pub fn insert_question(&self, new_question: NewQuestion) -> Question {
        let mut tables = self.tables.lock().unwrap();
        tables.question_seq += 1;
        let question = Question {
            id: tables.question_seq,
            question: new_question.question,
            answer: new_question.answer,
            category: new_question.category,
            difficulty: new_question.difficulty,
        };
        tables.questions.push(question.clone());
        question
    }

    fn check_writable(&self) -> Result<(), sqlx::Error> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

pub fn sample_question(text: &str, category: i32) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: Word().fake(),
        category,
        difficulty: 1,
    }
}

/// Full API router over the given store
pub fn test_server(store: &Arc<InMemoryStore>) -> TestServer {
    let services = AppServices::from_repositories(store.clone(), store.clone(), store.clone());
    TestServer::new(api_routes(&services, 1024 * 1024)).unwrap()
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Category>, sqlx::Error> {
        Ok(self.tables.lock().unwrap().categories.clone())
    }

    async fn create(&self, category_type: &str) -> Result<Category, sqlx::Error> {
        self.check_writable()?;
        Ok(self.insert_category(category_type))
    }
}

#[async_trait]
impl QuestionRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Question>, sqlx::Error> {
        Ok(self.tables.lock().unwrap().questions.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let needle = term.to_lowercase();
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create(&self, new_question: &NewQuestion) -> Result<Question, sqlx::Error> {
        self.check_writable()?;
        Ok(self.insert_question(new_question.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        self.check_writable()?;
        let mut tables = self.tables.lock().unwrap();
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        Ok(tables.questions.len() < before)
    }
}

#[async_trait]
impl LeaderboardRepository for InMemoryStore {
    async fn list_by_score(&self) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        let mut entries = self.tables.lock().unwrap().leaderboard.clone();
        entries.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
        Ok(entries)
    }

    async fn create(&self, player: &str, score: i32) -> Result<LeaderboardEntry, sqlx::Error> {
        self.check_writable()?;
        let mut tables = self.tables.lock().unwrap();
        tables.leaderboard_seq += 1;
        let entry = LeaderboardEntry {
            id: tables.leaderboard_seq,
            player: player.to_string(),
            score,
        };
        tables.leaderboard.push(entry.clone());
        Ok(entry)
    }
}
