use axum::{
    body::Body,
    extract::{Request, State},
    http::header::CONTENT_LENGTH,
    middleware::Next,
    response::Response,
};
use serde_json::Value;
use thiserror::Error;

use crate::{error::ApiError, http::AppState};

/// Largest request body the password gate will buffer.
pub const MAX_BODY_BYTES: usize = 100 * 1024;

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum PasswordError {
    #[error("Password is required")]
    Missing,

    #[error("Incorrect password")]
    Incorrect,
}

/// Compares a supplied stock password against the configured one.
pub fn verify_password(supplied: Option<&str>, expected: &str) -> Result<(), PasswordError> {
    match supplied {
        None | Some("") => Err(PasswordError::Missing),
        Some(password) if password == expected => Ok(()),
        Some(_) => Err(PasswordError::Incorrect),
    }
}

/// Removes the `password` field from a JSON body and returns it.
///
/// A password that is present but not a string can never match.
pub fn take_password(body: &mut Value) -> Result<Option<String>, PasswordError> {
    let supplied = body
        .as_object_mut()
        .and_then(|fields| fields.remove("password"));

    match supplied {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(password)) => Ok(Some(password)),
        Some(_) => Err(PasswordError::Incorrect),
    }
}

/// Middleware guarding every mutating route. The handler receives the body with the
/// password removed.
pub async fn require_stock_password(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = request.into_parts();

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|err| ApiError::MalformedPayload(err.to_string()))?;

    let mut payload: Value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).map_err(|err| ApiError::MalformedPayload(err.to_string()))?
    };

    let verified = take_password(&mut payload)
        .and_then(|supplied| verify_password(supplied.as_deref(), &state.settings.stock_password));

    if let Err(err) = verified {
        tracing::warn!("rejected {} {}: {}", parts.method, parts.uri, err);

        return Err(err.into());
    }

    let body = if payload.is_null() {
        Body::empty()
    } else {
        let stripped = serde_json::to_vec(&payload)
            .map_err(|err| ApiError::MalformedPayload(err.to_string()))?;

        Body::from(stripped)
    };

    parts.headers.remove(CONTENT_LENGTH);

    Ok(next.run(Request::from_parts(parts, body)).await)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_verify_password() {
        assert_eq!(verify_password(Some("2255"), "2255"), Ok(()));
        assert_eq!(
            verify_password(Some("wrong"), "2255"),
            Err(PasswordError::Incorrect)
        );
        assert_eq!(verify_password(None, "2255"), Err(PasswordError::Missing));
        assert_eq!(verify_password(Some(""), "2255"), Err(PasswordError::Missing));
    }

    #[test]
    fn test_take_password_strips_field() {
        let mut body = json!({ "machine_id": "M1", "status": "running", "password": "2255" });

        let password = take_password(&mut body).unwrap();

        assert_eq!(password.as_deref(), Some("2255"));
        assert_eq!(body, json!({ "machine_id": "M1", "status": "running" }));
    }

    #[test]
    fn test_take_password_absent() {
        let mut body = json!({ "machine_id": "M1" });
        assert_eq!(take_password(&mut body), Ok(None));

        let mut body = Value::Null;
        assert_eq!(take_password(&mut body), Ok(None));

        let mut body = json!(["2255"]);
        assert_eq!(take_password(&mut body), Ok(None));
    }

    #[test]
    fn test_take_password_non_string_never_matches() {
        let mut body = json!({ "password": 2255 });

        assert_eq!(take_password(&mut body), Err(PasswordError::Incorrect));
    }
}
