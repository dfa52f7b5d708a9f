use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use assettrack_auth::AuthError;
use assettrack_core::DomainError;
use assettrack_infra::StoreError;

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Conflict(msg) => json_error(StatusCode::CONFLICT, msg),
        other => json_error(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, msg),
        DomainError::Unauthorized => json_error(StatusCode::UNAUTHORIZED, "unauthorized"),
    }
}

pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        AuthError::InvalidCredentials => json_error(StatusCode::UNAUTHORIZED, "invalid credentials"),
        AuthError::Hashing(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, msg),
    }
}
