use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::{
        domain::{NoteFile, Question},
        dto::request::question_id,
    },
};

/// Request body understood by the generation service.
#[derive(Debug, Clone, Serialize)]
pub struct NotesPayload {
    pub id: String,
    pub name: String,
    pub content: String,
    pub example_questions: Option<Vec<String>>,
}

impl From<&NoteFile> for NotesPayload {
    fn from(note: &NoteFile) -> Self {
        NotesPayload {
            id: note.id.clone(),
            name: note.name.clone(),
            content: note.content.clone(),
            example_questions: note.example_question_lines(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuizResponse {
    pub generated_from: String,
    pub questions: Vec<GeneratedQuestion>,
}

impl GenerateQuizResponse {
    /// Questions in delivery order, identified by position. Tuples whose
    /// answer is not among their options are dropped.
    pub fn into_questions(self) -> Vec<Question> {
        let generated_from = self.generated_from;
        self.questions
            .into_iter()
            .filter(|q| {
                let usable = q.options.contains(&q.correct_answer);
                if !usable {
                    log::warn!(
                        "Skipping generated question for '{}' with answer outside its options: {}",
                        generated_from,
                        q.question
                    );
                }
                usable
            })
            .enumerate()
            .map(|(index, q)| Question::new(question_id(index), q.question, q.options, q.correct_answer))
            .collect()
    }
}

/// Turns study notes into a finished question set. Partial results are not a thing:
/// either the whole response arrives or the call fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, note: &NoteFile) -> AppResult<GenerateQuizResponse>;
}

pub struct HttpQuizGenerator {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
}

impl HttpQuizGenerator {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.generator_timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.generate_quiz_endpoint(),
            api_key: config.generator_api_key.clone(),
        })
    }
}

#[async_trait]
impl QuizGenerator for HttpQuizGenerator {
    async fn generate(&self, note: &NoteFile) -> AppResult<GenerateQuizResponse> {
        log::info!("Requesting quiz generation for note '{}' ({})", note.name, note.id);

        let mut request = self.client.post(&self.endpoint).json(&NotesPayload::from(note));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Quiz generation failed with {}: {}", status, body);
            return Err(AppError::GenerationError(format!(
                "generation service responded with {}",
                status
            )));
        }

        let generated: GenerateQuizResponse = response.json().await?;
        log::info!(
            "Generation service returned {} questions for note '{}'",
            generated.questions.len(),
            note.id
        );
        Ok(generated)
    }
}
