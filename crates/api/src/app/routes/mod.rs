use axum::Router;

pub mod analytics;
pub mod brands;
pub mod locations;
pub mod products;
pub mod system;
pub mod users;

/// Router for unauthenticated endpoints (registration/login, analytics reads).
pub fn public_router() -> Router {
    Router::new()
        .nest("/api/v1/users", users::public_router())
        .nest("/api/v1/analytics", analytics::router())
}

/// Router for bearer-token protected endpoints (all CRUD).
pub fn protected_router() -> Router {
    Router::new()
        .nest("/api/v1/users", users::protected_router())
        .nest("/api/v1/products", products::router())
        .nest("/api/v1/brands", brands::router())
        .nest("/api/v1/locations", locations::router())
}
