use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::acl::PasswordError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("{0}")]
    Unauthorized(#[from] PasswordError),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Server error")]
    Storage(#[from] anyhow::Error),

    #[error("Internal server error")]
    Internal,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedPayload(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MalformedPayload { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // storage detail stays in the server log
        if let ApiError::Storage(err) = &self {
            tracing::error!("storage error: {err:#}");
        }

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_is_not_leaked() {
        let err = ApiError::from(anyhow::anyhow!("relation \"logs\" does not exist"));

        assert_eq!(err.to_string(), "Server error");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(PasswordError::Incorrect)
                .into_response()
                .status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("Log entry not found")
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::MalformedPayload("expected value".to_owned())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
