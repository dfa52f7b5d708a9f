use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use assettrack_core::CompanyId;
use assettrack_infra::RecordStore;
use assettrack_inventory::Company;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_brand).get(list_brands))
        .route("/:id", get(get_brand).patch(update_brand))
}

fn parse_id(id: &str) -> Result<CompanyId, axum::response::Response> {
    id.parse()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid brand id"))
}

pub async fn create_brand(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
    Json(body): Json<dto::CreateBrandRequest>,
) -> axum::response::Response {
    let company = match Company::new(
        CompanyId::new(),
        body.name,
        body.description,
        auth.user_id(),
        Utc::now(),
    ) {
        Ok(company) => company,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.store().upsert_company(company.clone()).await {
        return errors::store_error_to_response(e);
    }

    (StatusCode::CREATED, Json(company)).into_response()
}

pub async fn list_brands(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list_companies().await {
        Ok(companies) => Json(companies).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_brand(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.store().get_company(id).await {
        Ok(Some(company)) => Json(company).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "brand not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_brand(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateBrandRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut company = match services.store().get_company(id).await {
        Ok(Some(company)) => company,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "brand not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    if let Some(name) = body.name {
        if name.trim().is_empty() {
            return errors::json_error(StatusCode::BAD_REQUEST, "company name cannot be empty");
        }
        company.name = name;
    }
    if let Some(description) = body.description {
        company.description = Some(description);
    }
    company.edited_by = Some(auth.user_id());

    if let Err(e) = services.store().upsert_company(company.clone()).await {
        return errors::store_error_to_response(e);
    }

    Json(company).into_response()
}
