use axum::Json;
use serde_json::{json, Value};

#[tracing::instrument(name = "http::banner")]
pub async fn banner() -> Json<Value> {
    Json(json!({
        "message": "Blade Management API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "data": "/api/data",
            "inventory": "/api/inventory",
            "logs": "/api/logs",
            "machine-blades": "/api/machine-blades",
            "blade-assignments": "/api/blade-assignments",
            "machine-status": "/api/machine-status",
            "reset": "/api/reset",
        }
    }))
}

#[tracing::instrument(name = "http::health")]
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}
