use crate::models::domain::{Question, QuizRecord};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Builds a question from string slices
    pub fn question(id: &str, options: &[&str], correct: &str) -> Question {
        Question::new(
            id,
            format!("Prompt for {}", id),
            options.iter().map(|o| o.to_string()).collect(),
            correct,
        )
    }

    /// Creates a record outside any store
    pub fn quiz_record(questions: Vec<Question>) -> QuizRecord {
        QuizRecord::new("Fixture Quiz", questions).expect("fixture questions should be valid")
    }

    /// q1: A/B/C/D with B correct, q2: E/F with E correct
    pub fn two_question_quiz_questions() -> Vec<Question> {
        vec![
            question("q1", &["A", "B", "C", "D"], "B"),
            question("q2", &["E", "F"], "E"),
        ]
    }

    pub fn two_question_quiz() -> QuizRecord {
        quiz_record(two_question_quiz_questions())
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_question() {
        let q = question("q9", &["x", "y"], "y");
        assert_eq!(q.id, "q9");
        assert_eq!(q.options, vec!["x", "y"]);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_fixtures_two_question_quiz() {
        let quiz = two_question_quiz();
        assert_eq!(quiz.question_count(), 2);
        assert_eq!(quiz.questions[0].correct_option, "B");
        assert_eq!(quiz.questions[1].correct_option, "E");
    }
}
