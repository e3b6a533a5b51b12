use std::collections::HashMap;

use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{
    quiz_session::ScoreReport, QuizSession, ScoreTier, SessionState,
};

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct HistoryEntry {
    pub quiz_id: String,
    pub title: String,
    pub question_count: usize,
    pub attempts: u32,
    pub best_score_percent: Option<u8>,
    pub tier: ScoreTier,
    pub tier_label: String,
    pub created_at: DateTime<Utc>,
    pub created_on: String,
    pub last_attempted_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct HistorySummary {
    pub total_quizzes: usize,
    pub total_attempts: u64,
    pub average_best_score: Option<f64>,
    pub entries: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub message: String,
}

/// Current question as shown to the quiz taker. The answer key is only
/// included once the question has been revealed.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

/// Everything the presentation layer needs to re-render after a transition.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub quiz_id: String,
    pub quiz_title: String,
    pub total_questions: usize,
    pub state: SessionState,
    pub completed: bool,
    pub revealed: bool,
    pub current_index: Option<usize>,
    pub current_question: Option<QuestionView>,
    pub answers: HashMap<String, String>,
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ScoreReport>,
}

impl SessionSnapshot {
    pub fn from_session(session_id: &str, session: &QuizSession) -> Self {
        let revealed = session.is_revealed();
        let current_question = session.current_question().map(|q| {
            let selected = session.selected_answer().map(str::to_string);
            QuestionView {
                id: q.id.clone(),
                prompt: q.prompt.clone(),
                options: q.options.clone(),
                correct_option: revealed.then(|| q.correct_option.clone()),
                is_correct: revealed.then(|| q.is_correct(selected.as_deref())),
                selected_option: selected,
            }
        });

        SessionSnapshot {
            session_id: session_id.to_string(),
            quiz_id: session.quiz().id.clone(),
            quiz_title: session.quiz().title.clone(),
            total_questions: session.quiz().question_count(),
            state: session.state(),
            completed: session.is_completed(),
            revealed,
            current_index: session.current_index(),
            current_question,
            answers: session.answers().clone(),
            score: session.score(),
            result: session.is_completed().then(|| session.report()),
        }
    }
}
