use async_graphql::InputObject;
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{NoteFile, Question};

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct QuestionInput {
    /// Assigned from the position (`q-0`, `q-1`, ...) when omitted
    pub id: Option<String>,

    #[validate(length(min = 1))]
    pub prompt: String,

    pub options: Vec<String>,

    pub correct_option: String,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct CreateQuizRequest {
    #[validate(length(max = 200))]
    pub title: Option<String>,

    // Emptiness is checked by the store, not here
    #[validate(nested)]
    pub questions: Vec<QuestionInput>,
}

impl CreateQuizRequest {
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
            .into_iter()
            .enumerate()
            .map(|(index, input)| {
                let id = input
                    .id
                    .filter(|id| !id.trim().is_empty())
                    .unwrap_or_else(|| question_id(index));
                Question::new(id, input.prompt, input.options, input.correct_option)
            })
            .collect()
    }
}

/// Notes to save, or to generate a quiz from directly.
#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct NoteRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, message = "Notes content must not be empty"))]
    pub content: String,

    pub example_questions: Option<String>,
}

impl From<NoteRequest> for NoteFile {
    fn from(request: NoteRequest) -> Self {
        NoteFile::new(&request.name, &request.content, request.example_questions)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartSessionRequest {
    #[validate(length(min = 1))]
    pub quiz_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SelectAnswerRequest {
    #[validate(length(min = 1))]
    pub option: String,
}

pub fn question_id(index: usize) -> String {
    format!("q-{}", index)
}
