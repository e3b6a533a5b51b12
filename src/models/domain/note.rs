use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Study notes kept for quiz generation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct NoteFile {
    pub id: String,
    pub name: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_questions: Option<String>, // free text, one example per line
}

impl NoteFile {
    pub fn new(name: &str, content: &str, example_questions: Option<String>) -> Self {
        NoteFile {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            content: content.to_string(),
            example_questions,
        }
    }

    /// Example guidance split into lines, `None` when there is nothing usable.
    pub fn example_question_lines(&self) -> Option<Vec<String>> {
        let lines: Vec<String> = self
            .example_questions
            .as_deref()?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(lines)
        }
    }
}
