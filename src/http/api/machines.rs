use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{
    error::ApiError,
    http::AppState,
    models::{
        BladeAssignment, BladeAssignmentUpdate, MachineBlade, MachineBladeUpdate, MachineStatus,
        MachineStatusUpdate,
    },
};

#[tracing::instrument(name = "http::machine_blades::set", skip_all)]
pub async fn set_blade(
    State(state): State<AppState>,
    payload: Result<Json<MachineBladeUpdate>, JsonRejection>,
) -> Result<Json<MachineBlade>, ApiError> {
    let Json(update) = payload?;

    let machine_blade = state
        .data_service
        .machine_service
        .set_blade(&update)
        .await?;

    Ok(Json(machine_blade))
}

#[tracing::instrument(name = "http::blade_assignments::set", skip_all)]
pub async fn assign_blades(
    State(state): State<AppState>,
    payload: Result<Json<BladeAssignmentUpdate>, JsonRejection>,
) -> Result<Json<BladeAssignment>, ApiError> {
    let Json(update) = payload?;

    let assignment = state
        .data_service
        .machine_service
        .assign_blades(&update)
        .await?;

    Ok(Json(assignment))
}

#[tracing::instrument(name = "http::machine_status::set", skip_all)]
pub async fn set_status(
    State(state): State<AppState>,
    payload: Result<Json<MachineStatusUpdate>, JsonRejection>,
) -> Result<Json<MachineStatus>, ApiError> {
    let Json(update) = payload?;

    let machine_status = state
        .data_service
        .machine_service
        .set_status(&update)
        .await?;

    Ok(Json(machine_status))
}
