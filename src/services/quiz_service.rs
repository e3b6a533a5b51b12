use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{quiz_record::resolve_title, NoteFile, QuizRecord},
        dto::{
            request::{CreateQuizRequest, NoteRequest},
            response::DeleteResponse,
        },
    },
    repositories::QuizRecordRepository,
    services::{generation_service::QuizGenerator, session_service::SessionService},
};

pub struct QuizService {
    repository: Arc<dyn QuizRecordRepository>,
    generator: Arc<dyn QuizGenerator>,
    sessions: Arc<SessionService>,
    default_title: String,
}

impl QuizService {
    pub fn new(
        repository: Arc<dyn QuizRecordRepository>,
        generator: Arc<dyn QuizGenerator>,
        sessions: Arc<SessionService>,
        default_title: &str,
    ) -> Self {
        Self {
            repository,
            generator,
            sessions,
            default_title: default_title.to_string(),
        }
    }

    pub fn repository(&self) -> Arc<dyn QuizRecordRepository> {
        Arc::clone(&self.repository)
    }

    pub fn list_quizzes(&self) -> Vec<QuizRecord> {
        self.repository.list_quizzes()
    }

    pub fn get_quiz(&self, id: &str) -> AppResult<QuizRecord> {
        self.repository
            .get_quiz(id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    pub fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<QuizRecord> {
        request.validate()?;

        let title = resolve_title(request.title.as_deref().unwrap_or_default(), &self.default_title);
        self.repository.create_quiz(&title, request.into_questions())
    }

    pub async fn generate_quiz(&self, request: NoteRequest) -> AppResult<QuizRecord> {
        request.validate()?;
        self.generate_from_note(&NoteFile::from(request)).await
    }

    /// Sends the notes to the generation service and stores the result as a new quiz.
    pub async fn generate_from_note(&self, note: &NoteFile) -> AppResult<QuizRecord> {
        let generated = self.generator.generate(note).await?;
        if generated.questions.is_empty() {
            log::warn!("Generation service returned no questions for note '{}'", note.id);
        }

        let title = resolve_title(&note.name, &self.default_title);
        self.repository.create_quiz(&title, generated.into_questions())
    }

    /// Removes the quiz and any live sessions still running it.
    pub async fn delete_quiz(&self, id: &str) -> AppResult<DeleteResponse> {
        let deleted = self.repository.delete_quiz(id)?;
        if deleted {
            self.sessions.drop_sessions_for_quiz(id).await;
        }
        let message = if deleted {
            "Quiz deleted successfully".to_string()
        } else {
            format!("No quiz with id '{}'", id)
        };

        Ok(DeleteResponse { deleted, message })
    }
}
