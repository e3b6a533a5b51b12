use std::collections::HashSet;

use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::DEFAULT_QUIZ_TITLE,
    errors::{AppError, AppResult},
    models::domain::question::Question,
};

/// A generated quiz together with its attempt statistics.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>, // never empty
    pub created_at: DateTime<Utc>,
    pub attempts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_attempt_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_score_percent: Option<u8>,
}

impl QuizRecord {
    /// Builds a fresh record. Fails with `InvalidInput` when there are no
    /// questions, a question is malformed, or two questions share an id.
    pub fn new(title: &str, questions: Vec<Question>) -> AppResult<Self> {
        if questions.is_empty() {
            return Err(AppError::InvalidInput(
                "A quiz needs at least one question".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for question in &questions {
            question.validate()?;
            if !seen.insert(question.id.as_str()) {
                return Err(AppError::InvalidInput(format!(
                    "Duplicate question id '{}'",
                    question.id
                )));
            }
        }

        Ok(QuizRecord {
            id: Uuid::new_v4().to_string(),
            title: resolve_title(title, DEFAULT_QUIZ_TITLE),
            questions,
            created_at: Utc::now(),
            attempts: 0,
            last_attempt_at: None,
            best_score_percent: None,
        })
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn has_been_attempted(&self) -> bool {
        self.best_score_percent.is_some()
    }

    /// Counts one completed attempt. The best score only ever goes up.
    pub fn apply_attempt(&mut self, score_percent: u8, at: DateTime<Utc>) {
        self.attempts += 1;
        self.last_attempt_at = Some(at);
        self.best_score_percent = Some(self.best_score_percent.unwrap_or(0).max(score_percent));
    }
}

pub fn resolve_title(title: &str, fallback: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        fallback.to_string()
    } else {
        title.to_string()
    }
}
