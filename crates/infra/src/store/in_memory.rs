use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use assettrack_auth::User;
use assettrack_core::{CompanyId, HistoryId, LocationId, ProductId, UserId};
use assettrack_inventory::{Company, History, Location, Product};

use super::{RecordStore, StoreError};

/// In-memory record store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    products: RwLock<HashMap<ProductId, Product>>,
    histories: RwLock<HashMap<HistoryId, History>>,
    companies: RwLock<HashMap<CompanyId, Company>>,
    locations: RwLock<HashMap<LocationId, Location>>,
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Access("lock poisoned".to_string())
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn upsert_product(&self, product: Product) -> Result<(), StoreError> {
        let mut map = self.products.write().map_err(|_| poisoned())?;
        map.insert(product.id, product);
        Ok(())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let map = self.products.read().map_err(|_| poisoned())?;
        Ok(map.get(&id).cloned())
    }

    async fn delete_product(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut map = self.products.write().map_err(|_| poisoned())?;
        Ok(map.remove(&id).is_some())
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let map = self.products.read().map_err(|_| poisoned())?;
        Ok(map.values().cloned().collect())
    }

    async fn upsert_history(&self, history: History) -> Result<(), StoreError> {
        let mut map = self.histories.write().map_err(|_| poisoned())?;
        map.insert(history.id, history);
        Ok(())
    }

    async fn get_history(&self, id: HistoryId) -> Result<Option<History>, StoreError> {
        let map = self.histories.read().map_err(|_| poisoned())?;
        Ok(map.get(&id).cloned())
    }

    async fn list_histories(&self) -> Result<Vec<History>, StoreError> {
        let map = self.histories.read().map_err(|_| poisoned())?;
        Ok(map.values().cloned().collect())
    }

    async fn upsert_company(&self, company: Company) -> Result<(), StoreError> {
        let mut map = self.companies.write().map_err(|_| poisoned())?;
        map.insert(company.id, company);
        Ok(())
    }

    async fn get_company(&self, id: CompanyId) -> Result<Option<Company>, StoreError> {
        let map = self.companies.read().map_err(|_| poisoned())?;
        Ok(map.get(&id).cloned())
    }

    async fn list_companies(&self) -> Result<Vec<Company>, StoreError> {
        let map = self.companies.read().map_err(|_| poisoned())?;
        Ok(map.values().cloned().collect())
    }

    async fn upsert_location(&self, location: Location) -> Result<(), StoreError> {
        let mut map = self.locations.write().map_err(|_| poisoned())?;
        map.insert(location.id, location);
        Ok(())
    }

    async fn get_location(&self, id: LocationId) -> Result<Option<Location>, StoreError> {
        let map = self.locations.read().map_err(|_| poisoned())?;
        Ok(map.get(&id).cloned())
    }

    async fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        let map = self.locations.read().map_err(|_| poisoned())?;
        Ok(map.values().cloned().collect())
    }

    async fn insert_user(&self, user: User) -> Result<(), StoreError> {
        let mut map = self.users.write().map_err(|_| poisoned())?;
        if map.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict(format!(
                "email '{}' is already registered",
                user.email
            )));
        }
        map.insert(user.id, user);
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let map = self.users.read().map_err(|_| poisoned())?;
        Ok(map.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let map = self.users.read().map_err(|_| poisoned())?;
        Ok(map.values().find(|u| u.email == email).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let map = self.users.read().map_err(|_| poisoned())?;
        Ok(map.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_product() -> Product {
        Product::new(
            ProductId::new(),
            "Laptop",
            Utc::now(),
            12,
            UserId::new(),
            CompanyId::new(),
            Utc::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn product_crud_round_trip() {
        let store = InMemoryRecordStore::new();
        let product = sample_product();
        let id = product.id;

        store.upsert_product(product.clone()).await.unwrap();
        assert_eq!(store.get_product(id).await.unwrap(), Some(product));

        assert!(store.delete_product(id).await.unwrap());
        assert!(!store.delete_product(id).await.unwrap());
        assert_eq!(store.get_product(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn missing_record_is_none_not_error() {
        let store = InMemoryRecordStore::new();
        assert_eq!(store.get_company(CompanyId::new()).await.unwrap(), None);
        assert_eq!(store.get_location(LocationId::new()).await.unwrap(), None);
        assert_eq!(store.get_history(HistoryId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = InMemoryRecordStore::new();
        let first =
            User::register(UserId::new(), "A", "a@example.com", "long enough", Utc::now()).unwrap();
        let second =
            User::register(UserId::new(), "B", "a@example.com", "long enough", Utc::now()).unwrap();

        store.insert_user(first).await.unwrap();
        let err = store.insert_user(second).await.unwrap_err();
        match err {
            StoreError::Conflict(_) => {}
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn find_user_by_email_matches_exactly() {
        let store = InMemoryRecordStore::new();
        let user =
            User::register(UserId::new(), "A", "a@example.com", "long enough", Utc::now()).unwrap();
        store.insert_user(user.clone()).await.unwrap();

        assert_eq!(
            store.find_user_by_email("a@example.com").await.unwrap(),
            Some(user)
        );
        assert_eq!(store.find_user_by_email("b@example.com").await.unwrap(), None);
    }
}
