use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use assettrack_analytics::Analytics;
use assettrack_auth::{Claims, Hs256JwtValidator, JwtError};
use assettrack_core::UserId;
use assettrack_infra::{InMemoryRecordStore, RecordStore};

#[cfg(feature = "postgres")]
use assettrack_infra::PostgresRecordStore;

/// Issued tokens are valid for 24 hours.
const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn RecordStore>,
    jwt: Arc<Hs256JwtValidator>,
}

pub async fn build_services(jwt: Arc<Hs256JwtValidator>) -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORES")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        #[cfg(feature = "postgres")]
        {
            return build_persistent_services(jwt).await;
        }
        #[cfg(not(feature = "postgres"))]
        {
            tracing::warn!(
                "USE_PERSISTENT_STORES=true but postgres feature not enabled, falling back to in-memory"
            );
            return build_in_memory_services(jwt);
        }
    }

    build_in_memory_services(jwt)
}

fn build_in_memory_services(jwt: Arc<Hs256JwtValidator>) -> AppServices {
    AppServices {
        store: Arc::new(InMemoryRecordStore::new()),
        jwt,
    }
}

#[cfg(feature = "postgres")]
async fn build_persistent_services(jwt: Arc<Hs256JwtValidator>) -> AppServices {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set when USE_PERSISTENT_STORES=true");

    let pool = sqlx::PgPool::connect(&database_url)
        .await
        .expect("failed to connect to Postgres");

    let store = PostgresRecordStore::new(pool);
    store
        .ensure_schema()
        .await
        .expect("failed to create record store schema");

    AppServices {
        store: Arc::new(store),
        jwt,
    }
}

impl AppServices {
    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    pub fn analytics(&self) -> Analytics<Arc<dyn RecordStore>> {
        Analytics::new(self.store.clone())
    }

    /// Sign a session token for a freshly authenticated user.
    pub fn sign_token(&self, user_id: UserId, now: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = Claims {
            sub: user_id,
            issued_at: now,
            expires_at: now + Duration::hours(TOKEN_TTL_HOURS),
        };
        self.jwt.sign(&claims)
    }
}
