//! The record store: the only view of persistence the rest of the system has.
//!
//! ## Design principles
//!
//! - **Typed CRUD surface**: one set of methods per collection (products,
//!   histories, companies, locations, users). No query language leaks out of
//!   this module; derived-field filtering, grouping, and reference resolution
//!   are application concerns.
//! - **A miss is not an error**: `get_*` return `Ok(None)` for unknown ids.
//!   `StoreError` is reserved for access failures (connectivity, poisoned
//!   state, malformed stored data) and uniqueness conflicts.
//! - **No storage assumptions**: works with the in-memory implementation
//!   (tests/dev) and the Postgres implementation (production, behind the
//!   `postgres` feature).

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use assettrack_auth::User;
use assettrack_core::{CompanyId, HistoryId, LocationId, ProductId, UserId};
use assettrack_inventory::{Company, History, Location, Product};

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryRecordStore;

/// Record store operation error.
///
/// These are **infrastructure errors**, as opposed to domain errors
/// (validation, invariants). They propagate unchanged through every layer
/// that touches the store; nothing retries or suppresses them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store access failed: {0}")]
    Access(String),

    #[error("stored record could not be (de)serialized: {0}")]
    Serialization(String),

    #[error("uniqueness conflict: {0}")]
    Conflict(String),
}

/// Durable collections of Product, History, Company, Location, and User
/// records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    // Products
    async fn upsert_product(&self, product: Product) -> Result<(), StoreError>;
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, StoreError>;
    async fn delete_product(&self, id: ProductId) -> Result<bool, StoreError>;
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    // Histories
    async fn upsert_history(&self, history: History) -> Result<(), StoreError>;
    async fn get_history(&self, id: HistoryId) -> Result<Option<History>, StoreError>;
    async fn list_histories(&self) -> Result<Vec<History>, StoreError>;

    // Companies (brands/manufacturers)
    async fn upsert_company(&self, company: Company) -> Result<(), StoreError>;
    async fn get_company(&self, id: CompanyId) -> Result<Option<Company>, StoreError>;
    async fn list_companies(&self) -> Result<Vec<Company>, StoreError>;

    // Locations
    async fn upsert_location(&self, location: Location) -> Result<(), StoreError>;
    async fn get_location(&self, id: LocationId) -> Result<Option<Location>, StoreError>;
    async fn list_locations(&self) -> Result<Vec<Location>, StoreError>;

    // Users
    /// Insert a new user. Fails with [`StoreError::Conflict`] if the email is
    /// already registered.
    async fn insert_user(&self, user: User) -> Result<(), StoreError>;
    async fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
}

#[async_trait]
impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    async fn upsert_product(&self, product: Product) -> Result<(), StoreError> {
        (**self).upsert_product(product).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).get_product(id).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<bool, StoreError> {
        (**self).delete_product(id).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        (**self).list_products().await
    }

    async fn upsert_history(&self, history: History) -> Result<(), StoreError> {
        (**self).upsert_history(history).await
    }

    async fn get_history(&self, id: HistoryId) -> Result<Option<History>, StoreError> {
        (**self).get_history(id).await
    }

    async fn list_histories(&self) -> Result<Vec<History>, StoreError> {
        (**self).list_histories().await
    }

    async fn upsert_company(&self, company: Company) -> Result<(), StoreError> {
        (**self).upsert_company(company).await
    }

    async fn get_company(&self, id: CompanyId) -> Result<Option<Company>, StoreError> {
        (**self).get_company(id).await
    }

    async fn list_companies(&self) -> Result<Vec<Company>, StoreError> {
        (**self).list_companies().await
    }

    async fn upsert_location(&self, location: Location) -> Result<(), StoreError> {
        (**self).upsert_location(location).await
    }

    async fn get_location(&self, id: LocationId) -> Result<Option<Location>, StoreError> {
        (**self).get_location(id).await
    }

    async fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        (**self).list_locations().await
    }

    async fn insert_user(&self, user: User) -> Result<(), StoreError> {
        (**self).insert_user(user).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        (**self).get_user(id).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        (**self).find_user_by_email(email).await
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        (**self).list_users().await
    }
}
