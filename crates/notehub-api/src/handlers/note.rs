//! Flat note handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crate::error::ApiError;
use notehub_entity::note::{CreateNote, Note, UpdateNote};

use crate::dto::request::SearchQuery;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/notes
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Note>>>, ApiError> {
    let notes = state.note_service.list().await?;
    Ok(Json(ApiResponse::ok(notes)))
}

/// GET /api/notes/:id
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Note>>, ApiError> {
    let note = state.note_service.get(&id).await?;
    Ok(Json(ApiResponse::ok(note)))
}

/// GET /api/notes/date/:date
pub async fn notes_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<ApiResponse<Vec<Note>>>, ApiError> {
    let notes = state.note_service.list_by_date(&date).await?;
    Ok(Json(ApiResponse::ok(notes)))
}

/// POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    Json(req): Json<CreateNote>,
) -> Result<(StatusCode, Json<ApiResponse<Note>>), ApiError> {
    let note = state.note_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(note))))
}

/// PUT /api/notes/:id
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateNote>,
) -> Result<Json<ApiResponse<Note>>, ApiError> {
    let note = state.note_service.update(&id, req).await?;
    Ok(Json(ApiResponse::ok(note)))
}

/// DELETE /api/notes/:id
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.note_service.delete(&id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Note deleted"))))
}

/// GET /api/search?q=...
pub async fn search_notes(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<Note>>>, ApiError> {
    let notes = state.note_service.search(&params.q).await?;
    Ok(Json(ApiResponse::ok(notes)))
}
