use std::any::Any;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, Uri,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::error::ApiError;

pub mod api;
pub mod health;
mod state;

pub use state::AppState;

pub fn router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.settings.allowed_origins));

    Router::new()
        .route("/", get(health::banner).fallback(not_found))
        .route("/health", get(health::health).fallback(not_found))
        .nest("/api", api::api_router(state.clone()))
        .fallback(not_found)
        .layer(middleware)
        .with_state(state)
}

pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let origins = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(origin) => Some(origin),
                Err(err) => {
                    tracing::warn!("ignoring allowed origin {origin:?}: {err}");
                    None
                }
            })
            .collect::<Vec<HeaderValue>>();

        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

#[tracing::instrument(name = "http::not_found", skip_all)]
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    tracing::warn!("unhandled request: {method} {uri}");

    ApiError::NotFound("Route not found")
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(detail) = err.downcast_ref::<String>() {
        detail.clone()
    } else if let Some(detail) = err.downcast_ref::<&str>() {
        detail.to_string()
    } else {
        "unknown panic".to_owned()
    };

    tracing::error!("handler panicked: {detail}");

    ApiError::Internal.into_response()
}
