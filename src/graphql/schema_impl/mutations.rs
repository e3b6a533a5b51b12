use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    app_state::AppState,
    models::{
        domain::{NoteFile, QuizRecord},
        dto::{
            request::{CreateQuizRequest, NoteRequest},
            response::DeleteResponse,
        },
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_quiz(&self, ctx: &Context<'_>, input: CreateQuizRequest) -> Result<QuizRecord> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.create_quiz(input).map_err(|e| e.extend())
    }

    async fn delete_quiz(&self, ctx: &Context<'_>, id: ID) -> Result<DeleteResponse> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.delete_quiz(&id).await.map_err(|e| e.extend())
    }

    async fn create_note(&self, ctx: &Context<'_>, input: NoteRequest) -> Result<NoteFile> {
        let state = ctx.data::<AppState>()?;
        state.note_service.add_note(input).map_err(|e| e.extend())
    }

    async fn delete_note(&self, ctx: &Context<'_>, id: ID) -> Result<DeleteResponse> {
        let state = ctx.data::<AppState>()?;
        state.note_service.delete_note(&id).map_err(|e| e.extend())
    }

    /// Generates a quiz from a saved note.
    async fn generate_quiz_from_note(&self, ctx: &Context<'_>, note_id: ID) -> Result<QuizRecord> {
        let state = ctx.data::<AppState>()?;
        let note = state.note_service.get_note(&note_id).map_err(|e| e.extend())?;
        state
            .quiz_service
            .generate_from_note(&note)
            .await
            .map_err(|e| e.extend())
    }
}

#[cfg(test)]
mod tests {
    use crate::{app_state::AppState, config::Config, graphql::create_schema};

    #[actix_rt::test]
    async fn test_create_quiz_mutation() {
        let state = AppState::new(Config::test_config()).unwrap();
        let schema = create_schema(state.clone());

        let response = schema
            .execute(
                r#"mutation {
                    createQuiz(input: {
                        title: "Oceans",
                        questions: [{ prompt: "Largest ocean?", options: ["Atlantic", "Pacific"], correctOption: "Pacific" }]
                    }) { id title attempts }
                }"#,
            )
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(state.quiz_service.list_quizzes().len(), 1);
    }

    #[actix_rt::test]
    async fn test_create_quiz_mutation_reports_invalid_input_code() {
        let schema = create_schema(AppState::new(Config::test_config()).unwrap());

        let response = schema
            .execute(r#"mutation { createQuiz(input: { title: "Empty", questions: [] }) { id } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        let extensions = response.errors[0]
            .extensions
            .as_ref()
            .expect("error should carry extensions");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("INVALID_INPUT"))
        );
    }

    #[actix_rt::test]
    async fn test_delete_unknown_quiz_mutation() {
        let schema = create_schema(AppState::new(Config::test_config()).unwrap());

        let response = schema
            .execute(r#"mutation { deleteQuiz(id: "missing") { deleted message } }"#)
            .await;

        assert!(response.errors.is_empty());
        assert_eq!(response.data.into_json().unwrap()["deleteQuiz"]["deleted"], false);
    }

    #[actix_rt::test]
    async fn test_create_note_mutation_rejects_empty_content() {
        let state = AppState::new(Config::test_config()).unwrap();
        let schema = create_schema(state.clone());

        let response = schema
            .execute(r#"mutation { createNote(input: { name: "Empty", content: "" }) { id } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        let extensions = response.errors[0]
            .extensions
            .as_ref()
            .expect("error should carry extensions");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("VALIDATION_ERROR"))
        );
        assert!(state.note_service.list_notes().is_empty());
    }
}
