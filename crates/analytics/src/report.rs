//! Analytics façade: the four reportable views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assettrack_infra::{RecordStore, StoreError};
use assettrack_inventory::StatusEntry;

use crate::enrich::{EnrichedProduct, enrich};
use crate::expiry::warranty_expiry;
use crate::grouping::{ChartSeries, group_count};
use crate::horizon::expiring_within;

pub const IN_WARRANTY: &str = "in warranty";
pub const NOT_IN_WARRANTY: &str = "not in warranty";

/// The three grouped-count views, computed independently per request.
///
/// Each view issues its own store reads; cross-view snapshot consistency is
/// not guaranteed under concurrent writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub useby: ChartSeries,
    pub expiry: ChartSeries,
    pub status: ChartSeries,
}

/// Read-only analytics over a record store.
#[derive(Debug, Clone)]
pub struct Analytics<S> {
    store: S,
}

impl<S: RecordStore> Analytics<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Products whose warranty expires on or before `now + horizon_months`,
    /// most recently purchased first, with references resolved.
    pub async fn expiring_products(
        &self,
        horizon_months: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<EnrichedProduct>, StoreError> {
        let products = self.store.list_products().await?;
        let selected = expiring_within(products, horizon_months, now);
        enrich(&self.store, selected).await
    }

    /// The three distribution views. Fails as a whole if any view fails;
    /// no partial summaries.
    pub async fn summary(&self, now: DateTime<Utc>) -> Result<AnalyticsSummary, StoreError> {
        let useby = self.usage_by_owner().await?;
        let expiry = self.warranty_status(now).await?;
        let status = self.product_status().await?;

        Ok(AnalyticsSummary {
            useby,
            expiry,
            status,
        })
    }

    /// How many products each user holds, keyed by the raw owner reference
    /// (labels are identifiers, not display names).
    async fn usage_by_owner(&self) -> Result<ChartSeries, StoreError> {
        let products = self.store.list_products().await?;
        let counts = group_count(&products, |p| p.owner.to_string());
        Ok(ChartSeries::from_counts("Products used by", counts))
    }

    /// In-warranty vs. not-in-warranty split. `now` is fixed once for the
    /// whole pass so a single report sees one consistent cutover; exact
    /// equality with the expiry instant still counts as in warranty.
    async fn warranty_status(&self, now: DateTime<Utc>) -> Result<ChartSeries, StoreError> {
        let products = self.store.list_products().await?;
        let counts = group_count(&products, |p| {
            if warranty_expiry(p.date_of_purchase, p.warranty_months) >= now {
                IN_WARRANTY.to_string()
            } else {
                NOT_IN_WARRANTY.to_string()
            }
        });
        Ok(ChartSeries::from_counts("Warranty", counts))
    }

    /// Distribution of recorded lifecycle statuses. Every status entry in
    /// every history record is one countable unit (a history with three
    /// entries contributes three).
    async fn product_status(&self) -> Result<ChartSeries, StoreError> {
        let histories = self.store.list_histories().await?;
        let entries: Vec<&StatusEntry> = histories.iter().flat_map(|h| h.status.iter()).collect();
        let counts = group_count(&entries, |e| e.name.clone());
        Ok(ChartSeries::from_counts("Product Status", counts))
    }
}
