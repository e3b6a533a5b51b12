use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    app_state::AppState,
    models::{
        domain::{NoteFile, QuizRecord},
        dto::response::HistorySummary,
    },
    services::history_service::HistoryService,
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All stored quizzes, oldest first
    async fn quizzes(&self, ctx: &Context<'_>) -> Result<Vec<QuizRecord>> {
        let state = ctx.data::<AppState>()?;
        Ok(state.quiz_service.list_quizzes())
    }

    async fn quiz(&self, ctx: &Context<'_>, id: ID) -> Result<Option<QuizRecord>> {
        let state = ctx.data::<AppState>()?;
        Ok(state.quiz_service.get_quiz(&id).ok())
    }

    async fn history(&self, ctx: &Context<'_>) -> Result<HistorySummary> {
        let state = ctx.data::<AppState>()?;
        let quizzes = state.quiz_service.list_quizzes();
        Ok(HistoryService::summarize(&quizzes))
    }

    async fn notes(&self, ctx: &Context<'_>) -> Result<Vec<NoteFile>> {
        let state = ctx.data::<AppState>()?;
        Ok(state.note_service.list_notes())
    }

    async fn note(&self, ctx: &Context<'_>, id: ID) -> Result<NoteFile> {
        let state = ctx.data::<AppState>()?;
        state.note_service.get_note(&id).map_err(|e| e.extend())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        app_state::AppState, config::Config, graphql::create_schema,
        models::dto::request::NoteRequest, test_utils::fixtures::two_question_quiz_questions,
    };

    #[actix_rt::test]
    async fn test_quizzes_query_lists_stored_quizzes() {
        let state = AppState::new(Config::test_config()).unwrap();
        state
            .quiz_service
            .repository()
            .create_quiz("Vowels", two_question_quiz_questions())
            .unwrap();
        let schema = create_schema(state);

        let response = schema
            .execute("{ quizzes { title attempts bestScorePercent questions { correctOption } } }")
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["quizzes"][0]["title"], "Vowels");
        assert_eq!(data["quizzes"][0]["attempts"], 0);
        assert!(data["quizzes"][0]["bestScorePercent"].is_null());
        assert_eq!(data["quizzes"][0]["questions"][0]["correctOption"], "B");
    }

    #[actix_rt::test]
    async fn test_unknown_quiz_is_null() {
        let schema = create_schema(AppState::new(Config::test_config()).unwrap());

        let response = schema.execute(r#"{ quiz(id: "missing") { id } }"#).await;

        assert!(response.errors.is_empty());
        assert!(response.data.into_json().unwrap()["quiz"].is_null());
    }

    #[actix_rt::test]
    async fn test_history_query_reports_not_taken() {
        let state = AppState::new(Config::test_config()).unwrap();
        state
            .quiz_service
            .repository()
            .create_quiz("Vowels", two_question_quiz_questions())
            .unwrap();
        let schema = create_schema(state);

        let response = schema
            .execute("{ history { totalQuizzes totalAttempts averageBestScore entries { tier tierLabel } } }")
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["history"]["totalQuizzes"], 1);
        assert!(data["history"]["averageBestScore"].is_null());
        assert_eq!(data["history"]["entries"][0]["tier"], "NOT_TAKEN");
        assert_eq!(data["history"]["entries"][0]["tierLabel"], "Not taken");
    }

    #[actix_rt::test]
    async fn test_unknown_note_reports_not_found_code() {
        let schema = create_schema(AppState::new(Config::test_config()).unwrap());

        let response = schema.execute(r#"{ note(id: "missing") { id } }"#).await;

        assert_eq!(response.errors.len(), 1);
        let extensions = response.errors[0]
            .extensions
            .as_ref()
            .expect("error should carry extensions");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("NOT_FOUND"))
        );
    }

    #[actix_rt::test]
    async fn test_notes_query_lists_saved_notes() {
        let state = AppState::new(Config::test_config()).unwrap();
        state
            .note_service
            .add_note(NoteRequest {
                name: "Biology".to_string(),
                content: "Cells".to_string(),
                example_questions: None,
            })
            .unwrap();
        let schema = create_schema(state);

        let response = schema.execute("{ notes { name content exampleQuestions } }").await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["notes"][0]["name"], "Biology");
        assert!(data["notes"][0]["exampleQuestions"].is_null());
    }
}
