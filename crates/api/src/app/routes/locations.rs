use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use assettrack_core::LocationId;
use assettrack_infra::RecordStore;
use assettrack_inventory::Location;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_location).get(list_locations))
        .route("/:id", get(get_location).patch(update_location))
}

fn parse_id(id: &str) -> Result<LocationId, axum::response::Response> {
    id.parse()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid location id"))
}

pub async fn create_location(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
    Json(body): Json<dto::CreateLocationRequest>,
) -> axum::response::Response {
    let location = match Location::new(
        LocationId::new(),
        body.name,
        body.address,
        auth.user_id(),
        Utc::now(),
    ) {
        Ok(location) => location,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.store().upsert_location(location.clone()).await {
        return errors::store_error_to_response(e);
    }

    (StatusCode::CREATED, Json(location)).into_response()
}

pub async fn list_locations(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list_locations().await {
        Ok(locations) => Json(locations).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_location(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.store().get_location(id).await {
        Ok(Some(location)) => Json(location).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "location not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_location(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateLocationRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut location = match services.store().get_location(id).await {
        Ok(Some(location)) => location,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "location not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    if let Some(name) = body.name {
        if name.trim().is_empty() {
            return errors::json_error(StatusCode::BAD_REQUEST, "location name cannot be empty");
        }
        location.name = name;
    }
    if let Some(address) = body.address {
        location.address = Some(address);
    }
    location.edited_by = Some(auth.user_id());

    if let Err(e) = services.store().upsert_location(location.clone()).await {
        return errors::store_error_to_response(e);
    }

    Json(location).into_response()
}
