use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::QuizSession, dto::response::SessionSnapshot},
    repositories::QuizRecordRepository,
};

struct SessionEntry {
    session: QuizSession,
    last_touched: DateTime<Utc>,
}

impl SessionEntry {
    fn new(session: QuizSession) -> Self {
        Self {
            session,
            last_touched: Utc::now(),
        }
    }

    fn touch(&mut self) {
        self.last_touched = Utc::now();
    }
}

/// Live quiz sessions, keyed by session id.
///
/// Sessions are never persisted. Abandoning one simply drops it; only a
/// completed attempt reaches the repository. Sessions left untouched for
/// longer than the idle timeout are evicted.
pub struct SessionService {
    repository: Arc<dyn QuizRecordRepository>,
    sessions: RwLock<HashMap<String, SessionEntry>>,
    idle_timeout: Duration,
}

impl SessionService {
    pub fn new(repository: Arc<dyn QuizRecordRepository>, idle_timeout: Duration) -> Self {
        Self {
            repository,
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    pub async fn start(&self, quiz_id: &str) -> AppResult<SessionSnapshot> {
        let quiz = self
            .repository
            .get_quiz(quiz_id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        let session = QuizSession::new(Arc::new(quiz))?;
        let session_id = Uuid::new_v4().to_string();
        let snapshot = SessionSnapshot::from_session(&session_id, &session);

        self.prune_idle(Utc::now()).await;
        self.sessions
            .write()
            .await
            .insert(session_id.clone(), SessionEntry::new(session));
        log::info!("Started session {} for quiz '{}'", session_id, quiz_id);
        Ok(snapshot)
    }

    pub async fn snapshot(&self, session_id: &str) -> AppResult<SessionSnapshot> {
        self.transition(session_id, |_, _| Ok(())).await
    }

    pub async fn select_answer(&self, session_id: &str, option: &str) -> AppResult<SessionSnapshot> {
        self.transition(session_id, |session, _| session.select_answer(option))
            .await
    }

    pub async fn reveal_answer(&self, session_id: &str) -> AppResult<SessionSnapshot> {
        self.transition(session_id, |session, _| session.reveal_answer())
            .await
    }

    pub async fn advance(&self, session_id: &str) -> AppResult<SessionSnapshot> {
        self.transition(session_id, |session, repository| {
            session.advance(repository).map(|_| ())
        })
        .await
    }

    pub async fn go_back(&self, session_id: &str) -> AppResult<SessionSnapshot> {
        self.transition(session_id, |session, _| session.go_back())
            .await
    }

    pub async fn retry(&self, session_id: &str) -> AppResult<SessionSnapshot> {
        self.transition(session_id, |session, _| session.retry())
            .await
    }

    /// Drops the session without touching the repository.
    pub async fn abandon(&self, session_id: &str) -> AppResult<()> {
        match self.sessions.write().await.remove(session_id) {
            Some(entry) => {
                log::info!(
                    "Abandoned session {} (quiz '{}', completed: {})",
                    session_id,
                    entry.session.quiz().id,
                    entry.session.is_completed()
                );
                Ok(())
            }
            None => Err(session_not_found(session_id)),
        }
    }

    /// Evicts sessions not touched within the idle timeout as of `now`.
    /// Returns how many were removed.
    pub async fn prune_idle(&self, now: DateTime<Utc>) -> usize {
        let Some(cutoff) = now.checked_sub_signed(self.idle_timeout) else {
            return 0;
        };
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_touched > cutoff);

        let evicted = before - sessions.len();
        if evicted > 0 {
            log::info!("Evicted {} idle quiz sessions", evicted);
        }
        evicted
    }

    /// Drops every session running the given quiz.
    pub async fn drop_sessions_for_quiz(&self, quiz_id: &str) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.session.quiz().id != quiz_id);

        let dropped = before - sessions.len();
        if dropped > 0 {
            log::info!("Dropped {} sessions for deleted quiz '{}'", dropped, quiz_id);
        }
        dropped
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn transition<F>(&self, session_id: &str, apply: F) -> AppResult<SessionSnapshot>
    where
        F: FnOnce(&mut QuizSession, &dyn QuizRecordRepository) -> AppResult<()>,
    {
        let mut sessions = self.sessions.write().await;
        let entry = sessions
            .get_mut(session_id)
            .ok_or_else(|| session_not_found(session_id))?;
        entry.touch();

        if let Err(err) = apply(&mut entry.session, self.repository.as_ref()) {
            log::debug!("Session {} rejected transition: {}", session_id, err);
            return Err(err);
        }
        Ok(SessionSnapshot::from_session(session_id, &entry.session))
    }
}

fn session_not_found(session_id: &str) -> AppError {
    AppError::NotFound(format!("Session with id '{}' not found", session_id))
}
