use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ApiError,
    http::AppState,
    models::{LogEntry, NewLogEntry},
};

#[tracing::instrument(name = "http::logs::create", skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewLogEntry>, JsonRejection>,
) -> Result<(StatusCode, Json<LogEntry>), ApiError> {
    let Json(new_entry) = payload?;

    let entry = state.data_service.log_service.create(&new_entry).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Ids that are not integers cannot name a row, so they are reported as not found.
#[tracing::instrument(name = "http::logs::delete", skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LogEntry>, ApiError> {
    let not_found = ApiError::NotFound("Log entry not found");

    let id: i64 = match id.parse() {
        Ok(id) => id,
        Err(_) => return Err(not_found),
    };

    match state.data_service.log_service.delete(id).await? {
        Some(entry) => Ok(Json(entry)),
        None => Err(not_found),
    }
}
