use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// A multiple-choice question. Correctness is decided by string equality
/// against `correct_option`, never by position.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>, // display order is significant
    pub correct_option: String,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option: impl Into<String>,
    ) -> Self {
        Question {
            id: id.into(),
            prompt: prompt.into(),
            options,
            correct_option: correct_option.into(),
        }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// An absent answer is never correct.
    pub fn is_correct(&self, answer: Option<&str>) -> bool {
        answer.is_some_and(|a| a == self.correct_option)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::InvalidInput("Question id must not be blank".to_string()));
        }
        if self.options.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Question '{}' has no options",
                self.id
            )));
        }
        if !self.has_option(&self.correct_option) {
            return Err(AppError::InvalidInput(format!(
                "Question '{}': correct option '{}' is not one of its options",
                self.id, self.correct_option
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital_question() -> Question {
        Question::new(
            "q-0",
            "Capital of France?",
            vec!["Berlin".into(), "Paris".into(), "Rome".into(), "Madrid".into()],
            "Paris",
        )
    }

    #[test]
    fn is_correct_uses_string_equality() {
        let question = capital_question();

        assert!(question.is_correct(Some("Paris")));
        assert!(!question.is_correct(Some("paris")));
        assert!(!question.is_correct(Some("Rome")));
        assert!(!question.is_correct(None));
    }

    #[test]
    fn validate_accepts_well_formed_question() {
        assert!(capital_question().validate().is_ok());
    }

    #[test]
    fn validate_rejects_correct_option_outside_options() {
        let mut question = capital_question();
        question.correct_option = "Lyon".to_string();

        assert!(matches!(question.validate(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn validate_rejects_question_without_options() {
        let question = Question::new("q-1", "Empty?", vec![], "A");

        assert!(matches!(question.validate(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(capital_question()).expect("question should serialize");

        assert_eq!(json["correctOption"], "Paris");
        assert_eq!(json["options"][1], "Paris");
    }
}
