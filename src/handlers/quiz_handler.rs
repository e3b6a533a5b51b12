use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateQuizRequest, NoteRequest},
    services::history_service::HistoryService,
};

#[get("/api/quizzes")]
pub async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.quiz_service.list_quizzes()))
}

#[post("/api/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.create_quiz(request.into_inner())?;
    Ok(HttpResponse::Created().json(quiz))
}

#[post("/api/quizzes/generate")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<NoteRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.generate_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[get("/api/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id)?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/api/quizzes/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.delete_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/history")]
pub async fn get_history(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes();
    Ok(HttpResponse::Ok().json(HistoryService::summarize(&quizzes)))
}
