use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{
        NoteRepository, QuizRecordRepository, SessionNoteRepository, SessionQuizRecordRepository,
    },
    services::{
        generation_service::{HttpQuizGenerator, QuizGenerator},
        note_service::NoteService,
        quiz_service::QuizService,
        session_service::SessionService,
    },
    storage::{MemorySessionStorage, SessionStorage},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub note_service: Arc<NoteService>,
    pub session_service: Arc<SessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let generator = Arc::new(HttpQuizGenerator::new(&config)?);
        Ok(Self::with_parts(
            config,
            Arc::new(MemorySessionStorage::new()),
            generator,
        ))
    }

    /// Wires the services around an existing storage slot and generator.
    pub fn with_parts(
        config: Config,
        storage: Arc<dyn SessionStorage>,
        generator: Arc<dyn QuizGenerator>,
    ) -> Self {
        let repository: Arc<dyn QuizRecordRepository> =
            Arc::new(SessionQuizRecordRepository::new(Arc::clone(&storage)));
        let notes: Arc<dyn NoteRepository> = Arc::new(SessionNoteRepository::new(storage));

        let session_service = Arc::new(SessionService::new(
            Arc::clone(&repository),
            config.session_idle_timeout(),
        ));
        let quiz_service = Arc::new(QuizService::new(
            repository,
            generator,
            Arc::clone(&session_service),
            &config.default_quiz_title,
        ));
        let note_service = Arc::new(NoteService::new(notes));

        Self {
            quiz_service,
            note_service,
            session_service,
            config: Arc::new(config),
        }
    }
}
