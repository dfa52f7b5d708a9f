//! Postgres-backed record store implementation.
//!
//! Records are persisted as JSONB documents, one table per collection
//! (`id UUID PRIMARY KEY, data JSONB NOT NULL`). This keeps the storage
//! schema aligned with the typed CRUD surface of [`RecordStore`]: the store
//! never interprets record contents beyond the `users` email uniqueness
//! constraint, which is enforced by a unique expression index on
//! `data->>'email'`.
//!
//! ## Error mapping
//!
//! | SQLx error | Postgres code | StoreError |
//! |------------|---------------|------------|
//! | Database (unique violation) | `23505` | `Conflict` |
//! | Database (other) | any other | `Access` |
//! | Pool/network/decode | n/a | `Access` |
//!
//! JSON (de)serialization failures map to `StoreError::Serialization`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use assettrack_auth::User;
use assettrack_core::{CompanyId, HistoryId, LocationId, ProductId, UserId};
use assettrack_inventory::{Company, History, Location, Product};

use super::{RecordStore, StoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS products  (id UUID PRIMARY KEY, data JSONB NOT NULL);
CREATE TABLE IF NOT EXISTS histories (id UUID PRIMARY KEY, data JSONB NOT NULL);
CREATE TABLE IF NOT EXISTS companies (id UUID PRIMARY KEY, data JSONB NOT NULL);
CREATE TABLE IF NOT EXISTS locations (id UUID PRIMARY KEY, data JSONB NOT NULL);
CREATE TABLE IF NOT EXISTS users     (id UUID PRIMARY KEY, data JSONB NOT NULL);
CREATE UNIQUE INDEX IF NOT EXISTS users_email_key ON users ((data->>'email'));
"#;

/// Postgres-backed record store.
///
/// Thread-safe via the SQLx connection pool; no additional locking.
#[derive(Debug, Clone)]
pub struct PostgresRecordStore {
    pool: Arc<PgPool>,
}

impl PostgresRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Create the document tables if they do not exist yet.
    ///
    /// Called once at startup by the service wiring.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement)
                .execute(self.pool.as_ref())
                .await
                .map_err(map_sqlx)?;
        }
        Ok(())
    }

    async fn upsert<V: Serialize>(&self, table: &str, id: Uuid, value: &V) -> Result<(), StoreError> {
        let data = serde_json::to_value(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let sql = format!(
            "INSERT INTO {table} (id, data) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET data = EXCLUDED.data"
        );
        sqlx::query(&sql)
            .bind(id)
            .bind(data)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn insert<V: Serialize>(&self, table: &str, id: Uuid, value: &V) -> Result<(), StoreError> {
        let data = serde_json::to_value(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let sql = format!("INSERT INTO {table} (id, data) VALUES ($1, $2)");
        sqlx::query(&sql)
            .bind(id)
            .bind(data)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn get<V: DeserializeOwned>(&self, table: &str, id: Uuid) -> Result<Option<V>, StoreError> {
        let sql = format!("SELECT data FROM {table} WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx)?;

        row.map(decode_row).transpose()
    }

    async fn delete(&self, table: &str, id: Uuid) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {table} WHERE id = $1");
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn list<V: DeserializeOwned>(&self, table: &str) -> Result<Vec<V>, StoreError> {
        let sql = format!("SELECT data FROM {table}");
        let rows = sqlx::query(&sql)
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(decode_row).collect()
    }
}

fn decode_row<V: DeserializeOwned>(row: sqlx::postgres::PgRow) -> Result<V, StoreError> {
    let data: serde_json::Value = row
        .try_get("data")
        .map_err(|e| StoreError::Access(e.to_string()))?;
    serde_json::from_value(data).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn map_sqlx(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some("23505") {
            return StoreError::Conflict(db.message().to_string());
        }
    }
    StoreError::Access(e.to_string())
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    async fn upsert_product(&self, product: Product) -> Result<(), StoreError> {
        self.upsert("products", product.id.into(), &product).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.get("products", id.into()).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<bool, StoreError> {
        self.delete("products", id.into()).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.list("products").await
    }

    async fn upsert_history(&self, history: History) -> Result<(), StoreError> {
        self.upsert("histories", history.id.into(), &history).await
    }

    async fn get_history(&self, id: HistoryId) -> Result<Option<History>, StoreError> {
        self.get("histories", id.into()).await
    }

    async fn list_histories(&self) -> Result<Vec<History>, StoreError> {
        self.list("histories").await
    }

    async fn upsert_company(&self, company: Company) -> Result<(), StoreError> {
        self.upsert("companies", company.id.into(), &company).await
    }

    async fn get_company(&self, id: CompanyId) -> Result<Option<Company>, StoreError> {
        self.get("companies", id.into()).await
    }

    async fn list_companies(&self) -> Result<Vec<Company>, StoreError> {
        self.list("companies").await
    }

    async fn upsert_location(&self, location: Location) -> Result<(), StoreError> {
        self.upsert("locations", location.id.into(), &location).await
    }

    async fn get_location(&self, id: LocationId) -> Result<Option<Location>, StoreError> {
        self.get("locations", id.into()).await
    }

    async fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        self.list("locations").await
    }

    async fn insert_user(&self, user: User) -> Result<(), StoreError> {
        self.insert("users", user.id.into(), &user).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        self.get("users", id.into()).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query("SELECT data FROM users WHERE data->>'email' = $1")
            .bind(email)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx)?;

        row.map(decode_row).transpose()
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.list("users").await
    }
}
