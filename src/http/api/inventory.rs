use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{
    error::ApiError,
    http::AppState,
    models::{InventoryItem, InventoryUpdate},
};

#[tracing::instrument(name = "http::inventory::upsert", skip_all)]
pub async fn upsert(
    State(state): State<AppState>,
    payload: Result<Json<InventoryUpdate>, JsonRejection>,
) -> Result<Json<InventoryItem>, ApiError> {
    let Json(update) = payload?;

    let item = state
        .data_service
        .inventory_service
        .upsert(&update)
        .await?;

    Ok(Json(item))
}
