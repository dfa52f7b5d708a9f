use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use serde::Deserialize;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(summary))
        .route("/expiring", get(expiring))
}

#[derive(Debug, Deserialize)]
pub struct ExpiringParams {
    months: Option<String>,
}

/// `GET /expiring?months=N` — products expiring (or already expired) on or
/// before `now + N` months, most recently purchased first, references
/// resolved. `months` defaults to 0; anything that is not a non-negative
/// integer is rejected up front rather than coerced.
pub async fn expiring(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<ExpiringParams>,
) -> axum::response::Response {
    let months = match params.months.as_deref() {
        None | Some("") => 0,
        Some(raw) => match raw.parse::<u32>() {
            Ok(months) => months,
            Err(_) => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "months must be a non-negative integer",
                );
            }
        },
    };

    match services.analytics().expiring_products(months, Utc::now()).await {
        Ok(products) => Json(products).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// `GET /` — the three distribution views in one payload. Fails as a whole
/// if any view fails.
pub async fn summary(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.analytics().summary(Utc::now()).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
