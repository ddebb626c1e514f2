use axum::{
    middleware,
    routing::{delete, get, post, MethodRouter},
    Router,
};

use super::{not_found, AppState};
use crate::acl::require_stock_password;

pub mod data;
pub mod inventory;
pub mod logs;
pub mod machines;
pub mod reset;

/// Routes mounted under `/api`. Everything except the aggregate read sits behind the
/// stock password.
pub fn api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/data", get(data::get_data).fallback(not_found))
        .route("/inventory", gated(post(inventory::upsert), &state))
        .route("/logs", gated(post(logs::create), &state))
        .route("/logs/:id", gated(delete(logs::delete), &state))
        .route("/machine-blades", gated(post(machines::set_blade), &state))
        .route(
            "/blade-assignments",
            gated(post(machines::assign_blades), &state),
        )
        .route("/machine-status", gated(post(machines::set_status), &state))
        .route("/reset", gated(post(reset::reset), &state))
}

/// Puts the password check in front of the route's handlers. Unsupported methods fall
/// through to `not_found` without being checked.
fn gated(method_router: MethodRouter<AppState>, state: &AppState) -> MethodRouter<AppState> {
    method_router
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_stock_password,
        ))
        .fallback(not_found)
}
