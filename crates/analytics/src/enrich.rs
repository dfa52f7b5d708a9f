//! Enrichment joiner: resolve a product's references into embedded records.
//!
//! Each reference resolves independently with a targeted store lookup. A
//! dangling owner/manufacturer/location becomes `None` (JSON null); a
//! dangling history id is dropped from the sequence. Missing-but-expected
//! relations are data, not errors — only a store *access* failure
//! propagates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assettrack_auth::UserProfile;
use assettrack_core::{HistoryId, ProductId};
use assettrack_infra::{RecordStore, StoreError};
use assettrack_inventory::{Company, History, Location, Product};

/// A product with its foreign keys resolved into embedded records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub date_of_purchase: DateTime<Utc>,
    pub warranty_months: u32,
    pub owner: Option<UserProfile>,
    pub manufacturer: Option<Company>,
    pub history: Vec<EnrichedHistory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedHistory {
    pub id: HistoryId,
    pub status: Vec<EnrichedStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedStatus {
    pub name: String,
    pub location: Option<Location>,
}

/// Resolve references for each product, preserving input order.
pub async fn enrich<S: RecordStore>(
    store: &S,
    products: Vec<Product>,
) -> Result<Vec<EnrichedProduct>, StoreError> {
    let mut enriched = Vec::with_capacity(products.len());
    for product in products {
        enriched.push(enrich_one(store, product).await?);
    }
    Ok(enriched)
}

async fn enrich_one<S: RecordStore>(
    store: &S,
    product: Product,
) -> Result<EnrichedProduct, StoreError> {
    let owner = store
        .get_user(product.owner)
        .await?
        .map(|user| user.profile());
    let manufacturer = store.get_company(product.manufacturer).await?;

    let mut history = Vec::with_capacity(product.history.len());
    for history_id in &product.history {
        if let Some(record) = store.get_history(*history_id).await? {
            history.push(enrich_history(store, record).await?);
        }
    }

    Ok(EnrichedProduct {
        id: product.id,
        name: product.name,
        date_of_purchase: product.date_of_purchase,
        warranty_months: product.warranty_months,
        owner,
        manufacturer,
        history,
    })
}

async fn enrich_history<S: RecordStore>(
    store: &S,
    record: History,
) -> Result<EnrichedHistory, StoreError> {
    let mut status = Vec::with_capacity(record.status.len());
    for entry in record.status {
        let location = store.get_location(entry.location).await?;
        status.push(EnrichedStatus {
            name: entry.name,
            location,
        });
    }
    Ok(EnrichedHistory {
        id: record.id,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assettrack_auth::User;
    use assettrack_core::{CompanyId, LocationId, UserId};
    use assettrack_infra::InMemoryRecordStore;
    use assettrack_inventory::StatusEntry;

    async fn seeded_store() -> (InMemoryRecordStore, Product) {
        let store = InMemoryRecordStore::new();
        let now = Utc::now();

        let owner =
            User::register(UserId::new(), "Asha", "asha@example.com", "long enough", now).unwrap();
        let company = Company::new(CompanyId::new(), "Lenovo", None, owner.id, now).unwrap();
        let location = Location::new(LocationId::new(), "HQ", None, owner.id, now).unwrap();
        let history = History::new(
            HistoryId::new(),
            vec![StatusEntry {
                name: "in use".to_string(),
                location: location.id,
            }],
        );

        let mut product =
            Product::new(ProductId::new(), "Laptop", now, 12, owner.id, company.id, now).unwrap();
        product.attach_history(history.id);

        store.insert_user(owner).await.unwrap();
        store.upsert_company(company).await.unwrap();
        store.upsert_location(location).await.unwrap();
        store.upsert_history(history).await.unwrap();
        store.upsert_product(product.clone()).await.unwrap();

        (store, product)
    }

    #[tokio::test]
    async fn resolves_every_reference_when_present() {
        let (store, product) = seeded_store().await;

        let enriched = enrich(&store, vec![product]).await.unwrap();
        let item = &enriched[0];

        assert_eq!(item.owner.as_ref().unwrap().name, "Asha");
        assert_eq!(item.manufacturer.as_ref().unwrap().name, "Lenovo");
        assert_eq!(item.history.len(), 1);
        assert_eq!(item.history[0].status[0].name, "in use");
        assert_eq!(
            item.history[0].status[0].location.as_ref().unwrap().name,
            "HQ"
        );
    }

    #[tokio::test]
    async fn dangling_references_become_null_without_failing() {
        let store = InMemoryRecordStore::new();
        let now = Utc::now();

        // Nothing but the product and a history with an unresolvable location.
        let history = History::new(
            HistoryId::new(),
            vec![StatusEntry {
                name: "retired".to_string(),
                location: LocationId::new(),
            }],
        );
        let mut product = Product::new(
            ProductId::new(),
            "Orphan",
            now,
            6,
            UserId::new(),
            CompanyId::new(),
            now,
        )
        .unwrap();
        product.attach_history(history.id);
        product.attach_history(HistoryId::new()); // dangles entirely

        store.upsert_history(history).await.unwrap();
        store.upsert_product(product.clone()).await.unwrap();

        let enriched = enrich(&store, vec![product]).await.unwrap();
        let item = &enriched[0];

        assert!(item.owner.is_none());
        assert!(item.manufacturer.is_none());
        // The dangling history id is dropped; the resolvable one survives
        // with a null location. The rest of the record is untouched.
        assert_eq!(item.history.len(), 1);
        assert_eq!(item.history[0].status[0].name, "retired");
        assert!(item.history[0].status[0].location.is_none());
        assert_eq!(item.name, "Orphan");
    }

    #[tokio::test]
    async fn preserves_input_order() {
        let store = InMemoryRecordStore::new();
        let now = Utc::now();
        let mut products = Vec::new();
        for name in ["first", "second", "third"] {
            products.push(
                Product::new(ProductId::new(), name, now, 1, UserId::new(), CompanyId::new(), now)
                    .unwrap(),
            );
        }

        let enriched = enrich(&store, products.clone()).await.unwrap();
        let names: Vec<_> = enriched.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn serialized_owner_carries_no_password_hash() {
        let (store, product) = seeded_store().await;
        let enriched = enrich(&store, vec![product]).await.unwrap();

        let json = serde_json::to_value(&enriched[0]).unwrap();
        assert!(json["owner"].get("password_hash").is_none());
        assert_eq!(json["owner"]["name"], "Asha");
    }
}
