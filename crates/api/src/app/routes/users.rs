use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use assettrack_auth::User;
use assettrack_core::UserId;
use assettrack_infra::RecordStore;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AuthContext;

pub fn public_router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

pub fn protected_router() -> Router {
    Router::new()
        .route("/", get(list_users))
        .route("/me", get(me))
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> axum::response::Response {
    let user = match User::register(UserId::new(), body.name, body.email, &body.password, Utc::now())
    {
        Ok(user) => user,
        Err(e) => return errors::auth_error_to_response(e),
    };

    let profile = user.profile();
    if let Err(e) = services.store().insert_user(user).await {
        return errors::store_error_to_response(e);
    }

    (StatusCode::CREATED, Json(profile)).into_response()
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    let user = match services.store().find_user_by_email(&body.email).await {
        Ok(Some(user)) => user,
        Ok(None) => return errors::json_error(StatusCode::UNAUTHORIZED, "invalid credentials"),
        Err(e) => return errors::store_error_to_response(e),
    };

    if !user.verify_password(&body.password) {
        return errors::json_error(StatusCode::UNAUTHORIZED, "invalid credentials");
    }

    let token = match services.sign_token(user.id, Utc::now()) {
        Ok(token) => token,
        Err(e) => return errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };

    Json(serde_json::json!({
        "token": token,
        "user": user.profile(),
    }))
    .into_response()
}

pub async fn me(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
) -> axum::response::Response {
    match services.store().get_user(auth.user_id()).await {
        Ok(Some(user)) => Json(user.profile()).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "user not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list_users().await {
        Ok(users) => {
            let profiles: Vec<_> = users.iter().map(User::profile).collect();
            Json(profiles).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}
