use std::{collections::HashMap, sync::Arc};

use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{question::Question, quiz_record::QuizRecord, score_tier::ScoreTier},
    repositories::QuizRecordRepository,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionState {
    InProgress { current_index: usize, revealed: bool },
    Completed { score: u8 },
}

/// Outcome of a single question once the attempt is scored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionResult {
    pub question_id: String,
    pub prompt: String,
    pub selected_option: Option<String>,
    pub correct_option: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub correct: usize,
    pub total: usize,
    pub percentage: u8,
    pub tier: ScoreTier,
    pub questions: Vec<QuestionResult>,
}

/// One attempt at a quiz record.
///
/// The session never mutates the record it was started from. The only way it
/// reports back is the single `record_attempt` call made when `advance` moves
/// past the final question. Dropping a session mid-way leaves the store alone.
#[derive(Clone, Debug)]
pub struct QuizSession {
    quiz: Arc<QuizRecord>,
    answers: HashMap<String, String>,
    state: SessionState,
}

impl QuizSession {
    pub fn new(quiz: Arc<QuizRecord>) -> AppResult<Self> {
        if quiz.questions.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Quiz '{}' has no questions",
                quiz.id
            )));
        }

        Ok(QuizSession {
            quiz,
            answers: HashMap::new(),
            state: SessionState::InProgress {
                current_index: 0,
                revealed: false,
            },
        })
    }

    pub fn quiz(&self) -> &QuizRecord {
        &self.quiz
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn answers(&self) -> &HashMap<String, String> {
        &self.answers
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, SessionState::Completed { .. })
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.state, SessionState::InProgress { revealed: true, .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { current_index, .. } => Some(current_index),
            SessionState::Completed { .. } => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().map(|i| &self.quiz.questions[i])
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.current_question()
            .and_then(|q| self.answers.get(&q.id))
            .map(String::as_str)
    }

    pub fn score(&self) -> Option<u8> {
        match self.state {
            SessionState::Completed { score } => Some(score),
            SessionState::InProgress { .. } => None,
        }
    }

    pub fn select_answer(&mut self, option: &str) -> AppResult<()> {
        let question = self.in_progress_question("select an answer")?;
        if !question.has_option(option) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not an option of question '{}'",
                option, question.id
            )));
        }

        let question_id = question.id.clone();
        self.answers.insert(question_id, option.to_string());
        Ok(())
    }

    pub fn reveal_answer(&mut self) -> AppResult<()> {
        let SessionState::InProgress { current_index, revealed } = self.state else {
            return Err(not_in_progress("reveal an answer"));
        };
        if revealed {
            return Ok(());
        }
        if self.selected_answer().is_none() {
            return Err(AppError::ValidationError("select an answer first".to_string()));
        }

        self.state = SessionState::InProgress {
            current_index,
            revealed: true,
        };
        Ok(())
    }

    /// Moves to the next question, or scores the attempt when on the last one.
    /// On the scoring path the attempt is handed to `store` first; if that
    /// fails the session stays where it was.
    pub fn advance(&mut self, store: &dyn QuizRecordRepository) -> AppResult<SessionState> {
        let SessionState::InProgress { current_index, .. } = self.state else {
            return Err(not_in_progress("advance"));
        };
        if self.selected_answer().is_none() {
            return Err(AppError::ValidationError("select an answer first".to_string()));
        }

        let last_index = self.quiz.questions.len() - 1;
        if current_index < last_index {
            self.state = SessionState::InProgress {
                current_index: current_index + 1,
                revealed: false,
            };
            return Ok(self.state);
        }

        let score = score_percent(self.correct_count(), self.quiz.questions.len());
        if store.record_attempt(&self.quiz.id, score)?.is_none() {
            log::warn!(
                "Completed attempt for quiz '{}' was not recorded: quiz no longer stored",
                self.quiz.id
            );
        }

        self.state = SessionState::Completed { score };
        Ok(self.state)
    }

    pub fn go_back(&mut self) -> AppResult<()> {
        match self.state {
            SessionState::InProgress { current_index, .. } if current_index > 0 => {
                self.state = SessionState::InProgress {
                    current_index: current_index - 1,
                    revealed: false,
                };
                Ok(())
            }
            SessionState::InProgress { .. } => Err(AppError::ValidationError(
                "already at the first question".to_string(),
            )),
            SessionState::Completed { .. } => Err(not_in_progress("go back")),
        }
    }

    pub fn retry(&mut self) -> AppResult<()> {
        if !self.is_completed() {
            return Err(AppError::ValidationError(
                "only a completed quiz can be retried".to_string(),
            ));
        }

        self.answers.clear();
        self.state = SessionState::InProgress {
            current_index: 0,
            revealed: false,
        };
        Ok(())
    }

    pub fn correct_count(&self) -> usize {
        self.quiz
            .questions
            .iter()
            .filter(|q| q.is_correct(self.answers.get(&q.id).map(String::as_str)))
            .count()
    }

    pub fn report(&self) -> ScoreReport {
        let total = self.quiz.questions.len();
        let correct = self.correct_count();
        let percentage = score_percent(correct, total);

        let questions = self
            .quiz
            .questions
            .iter()
            .map(|q| {
                let selected = self.answers.get(&q.id).cloned();
                QuestionResult {
                    question_id: q.id.clone(),
                    prompt: q.prompt.clone(),
                    is_correct: q.is_correct(selected.as_deref()),
                    selected_option: selected,
                    correct_option: q.correct_option.clone(),
                }
            })
            .collect();

        ScoreReport {
            correct,
            total,
            percentage,
            tier: ScoreTier::classify(percentage),
            questions,
        }
    }

    fn in_progress_question(&self, action: &str) -> AppResult<&Question> {
        self.current_question().ok_or_else(|| not_in_progress(action))
    }
}

/// `round(100 * correct / total)` with halves rounded up, in integer math.
pub fn score_percent(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    ((200 * correct + total) / (2 * total)) as u8
}

fn not_in_progress(action: &str) -> AppError {
    AppError::ValidationError(format!("cannot {} once the quiz is completed", action))
}
