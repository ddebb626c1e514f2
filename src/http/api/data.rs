use axum::{extract::State, Json};

use crate::{error::ApiError, http::AppState, models::DataSnapshot};

#[tracing::instrument(name = "http::data::get", skip_all)]
pub async fn get_data(State(state): State<AppState>) -> Result<Json<DataSnapshot>, ApiError> {
    let snapshot = state.data_service.snapshot().await?;

    Ok(Json(snapshot))
}
