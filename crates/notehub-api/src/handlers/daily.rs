//! Daily note handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::error::ApiError;
use notehub_entity::daily::{DailyList, DailyNote};
use notehub_service::daily::DailyConfig;

use crate::dto::request::UpsertDailyRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/daily/:date
///
/// Creates the note (and the `/daily` folder) on first access, so this
/// returns 201 the first time a date is opened and 200 afterwards.
pub async fn get_daily(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<DailyNote>>), ApiError> {
    let (note, created) = state.daily_service.get_or_create(&date).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(ApiResponse::ok(note))))
}

/// PUT /api/daily/:date
pub async fn put_daily(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(req): Json<UpsertDailyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DailyNote>>), ApiError> {
    let (note, created) = state.daily_service.upsert(&date, req.content).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(ApiResponse::ok(note))))
}

/// DELETE /api/daily/:date
pub async fn delete_daily(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.daily_service.delete(&date).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Daily note deleted",
    ))))
}

/// GET /api/daily
pub async fn list_daily(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DailyList>>, ApiError> {
    let list = state.daily_service.list().await?;
    Ok(Json(ApiResponse::ok(list)))
}

/// GET /api/daily/config
pub async fn get_config(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DailyConfig>>, ApiError> {
    let config = state.daily_service.config().await?;
    Ok(Json(ApiResponse::ok(config)))
}

/// PUT /api/daily/config
///
/// The store keeps daily notes in the database alongside everything
/// else, so there is nothing to reconfigure; the current report is
/// returned for client compatibility.
pub async fn put_config(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DailyConfig>>, ApiError> {
    let config = state.daily_service.config().await?;
    Ok(Json(ApiResponse::ok(config)))
}
