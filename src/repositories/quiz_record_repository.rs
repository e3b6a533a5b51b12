use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use crate::{
    errors::AppResult,
    models::domain::{Question, QuizRecord},
    storage::{load_collection, save_collection, SessionStorage},
};

/// Storage slot holding the whole quiz collection.
pub const QUIZZES_KEY: &str = "quizzes";

/// Sole owner of persisted quiz state.
#[cfg_attr(test, mockall::automock)]
pub trait QuizRecordRepository: Send + Sync {
    fn create_quiz(&self, title: &str, questions: Vec<Question>) -> AppResult<QuizRecord>;
    fn list_quizzes(&self) -> Vec<QuizRecord>;
    fn get_quiz(&self, id: &str) -> Option<QuizRecord>;
    /// Returns the updated record, or `None` when no quiz has this id.
    fn record_attempt(&self, id: &str, score_percent: u8) -> AppResult<Option<QuizRecord>>;
    /// Returns whether a record was removed.
    fn delete_quiz(&self, id: &str) -> AppResult<bool>;
}

/// Keeps the collection as one JSON array in a session-scoped slot.
/// Each mutation reads the full list, changes it and writes it back.
pub struct SessionQuizRecordRepository {
    storage: Arc<dyn SessionStorage>,
    write_lock: Mutex<()>,
}

impl SessionQuizRecordRepository {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Vec<QuizRecord> {
        load_collection(self.storage.as_ref(), QUIZZES_KEY)
    }

    fn save(&self, records: &[QuizRecord]) -> AppResult<()> {
        save_collection(self.storage.as_ref(), QUIZZES_KEY, records)
    }
}

impl QuizRecordRepository for SessionQuizRecordRepository {
    fn create_quiz(&self, title: &str, questions: Vec<Question>) -> AppResult<QuizRecord> {
        let record = QuizRecord::new(title, questions)?;

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut records = self.load();
        records.push(record.clone());
        self.save(&records)?;

        log::info!(
            "Created quiz '{}' ({}) with {} questions",
            record.title,
            record.id,
            record.question_count()
        );
        Ok(record)
    }

    fn list_quizzes(&self) -> Vec<QuizRecord> {
        self.load()
    }

    fn get_quiz(&self, id: &str) -> Option<QuizRecord> {
        let quiz = self.load().into_iter().find(|q| q.id == id);
        if quiz.is_none() {
            log::debug!("Quiz '{}' not found", id);
        }
        quiz
    }

    fn record_attempt(&self, id: &str, score_percent: u8) -> AppResult<Option<QuizRecord>> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut records = self.load();

        let Some(record) = records.iter_mut().find(|q| q.id == id) else {
            log::warn!("Ignoring attempt for unknown quiz '{}'", id);
            return Ok(None);
        };

        record.apply_attempt(score_percent, Utc::now());
        let updated = record.clone();
        self.save(&records)?;

        log::info!(
            "Recorded attempt {} for quiz '{}' at {}% (best {}%)",
            updated.attempts,
            updated.id,
            score_percent,
            updated.best_score_percent.unwrap_or(score_percent)
        );
        Ok(Some(updated))
    }

    fn delete_quiz(&self, id: &str) -> AppResult<bool> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut records = self.load();
        let before = records.len();
        records.retain(|q| q.id != id);
        let removed = records.len() != before;

        if !removed {
            log::warn!("Ignoring delete for unknown quiz '{}'", id);
        }
        self.save(&records)?;
        Ok(removed)
    }
}
