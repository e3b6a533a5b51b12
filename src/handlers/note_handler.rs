use actix_web::{delete, get, post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::NoteRequest};

#[get("/api/notes")]
pub async fn list_notes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.note_service.list_notes()))
}

#[post("/api/notes")]
pub async fn create_note(
    state: web::Data<AppState>,
    request: web::Json<NoteRequest>,
) -> Result<HttpResponse, AppError> {
    let note = state.note_service.add_note(request.into_inner())?;
    Ok(HttpResponse::Created().json(note))
}

#[get("/api/notes/{id}")]
pub async fn get_note(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let note = state.note_service.get_note(&id)?;
    Ok(HttpResponse::Ok().json(note))
}

#[delete("/api/notes/{id}")]
pub async fn delete_note(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.note_service.delete_note(&id)?;
    Ok(HttpResponse::Ok().json(response))
}

/// Generates a new quiz from a saved note.
#[post("/api/notes/{id}/generate")]
pub async fn generate_from_note(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let note = state.note_service.get_note(&id)?;
    let quiz = state.quiz_service.generate_from_note(&note).await?;
    Ok(HttpResponse::Created().json(quiz))
}
