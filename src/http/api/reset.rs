use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{error::ApiError, http::AppState};

#[tracing::instrument(name = "http::reset", skip_all)]
pub async fn reset(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.data_service.reset().await?;

    Ok(Json(json!({ "message": "All data has been reset successfully" })))
}
