use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{SelectAnswerRequest, StartSessionRequest},
};

#[post("/api/sessions")]
pub async fn start_session(
    state: web::Data<AppState>,
    request: web::Json<StartSessionRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let snapshot = state.session_service.start(&request.quiz_id).await?;
    Ok(HttpResponse::Created().json(snapshot))
}

#[get("/api/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.session_service.snapshot(&id).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[delete("/api/sessions/{id}")]
pub async fn abandon_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.session_service.abandon(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/api/sessions/{id}/answer")]
pub async fn select_answer(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SelectAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let snapshot = state
        .session_service
        .select_answer(&id, &request.option)
        .await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/sessions/{id}/reveal")]
pub async fn reveal_answer(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.session_service.reveal_answer(&id).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/sessions/{id}/advance")]
pub async fn advance(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.session_service.advance(&id).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/sessions/{id}/back")]
pub async fn go_back(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.session_service.go_back(&id).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/sessions/{id}/retry")]
pub async fn retry(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state.session_service.retry(&id).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}
