use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use assettrack_core::{HistoryId, ProductId};
use assettrack_infra::RecordStore;
use assettrack_inventory::{History, Product, StatusEntry};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:id",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .route("/:id/history", post(append_history))
}

fn parse_id(id: &str) -> Result<ProductId, axum::response::Response> {
    id.parse()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid product id"))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    let product = match Product::new(
        ProductId::new(),
        body.name,
        body.date_of_purchase,
        body.warranty_months,
        body.owner,
        body.manufacturer,
        Utc::now(),
    ) {
        Ok(product) => product,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.store().upsert_product(product.clone()).await {
        return errors::store_error_to_response(e);
    }

    (StatusCode::CREATED, Json(product)).into_response()
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list_products().await {
        Ok(products) => Json(products).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.store().get_product(id).await {
        Ok(Some(product)) => Json(product).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "product not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateProductRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut product = match services.store().get_product(id).await {
        Ok(Some(product)) => product,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "product not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    if let Some(name) = body.name {
        if name.trim().is_empty() {
            return errors::json_error(StatusCode::BAD_REQUEST, "product name cannot be empty");
        }
        product.name = name;
    }
    if let Some(date_of_purchase) = body.date_of_purchase {
        product.date_of_purchase = date_of_purchase;
    }
    if let Some(warranty_months) = body.warranty_months {
        product.warranty_months = warranty_months;
    }
    if let Some(owner) = body.owner {
        product.owner = owner;
    }
    if let Some(manufacturer) = body.manufacturer {
        product.manufacturer = manufacturer;
    }

    if let Err(e) = services.store().upsert_product(product.clone()).await {
        return errors::store_error_to_response(e);
    }

    Json(product).into_response()
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.store().delete_product(id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "product not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Record a status change: persists a new History record and links it to the
/// product, in that order, so a concurrent reader never sees a dangling id.
pub async fn append_history(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AppendHistoryRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut product = match services.store().get_product(id).await {
        Ok(Some(product)) => product,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "product not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    let status: Vec<StatusEntry> = body
        .status
        .into_iter()
        .map(|entry| StatusEntry {
            name: entry.name,
            location: entry.location,
        })
        .collect();
    let history = History::new(HistoryId::new(), status);

    if let Err(e) = services.store().upsert_history(history.clone()).await {
        return errors::store_error_to_response(e);
    }

    product.attach_history(history.id);
    if let Err(e) = services.store().upsert_product(product).await {
        return errors::store_error_to_response(e);
    }

    (StatusCode::CREATED, Json(history)).into_response()
}
