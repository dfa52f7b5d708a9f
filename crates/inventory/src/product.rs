use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assettrack_core::{CompanyId, DomainError, HistoryId, ProductId, UserId};

/// An inventory item.
///
/// # Invariants
/// - `name` is non-empty after trimming.
/// - `warranty_months` is non-negative by construction (`u32`).
/// - `date_of_purchase` is any valid instant; future-dated purchases are
///   permitted and simply yield a future warranty expiry.
/// - `owner` and `manufacturer` are always present but may dangle (the
///   referenced record can be deleted out from under them).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub date_of_purchase: DateTime<Utc>,
    pub warranty_months: u32,
    /// The "used by" relation.
    pub owner: UserId,
    pub manufacturer: CompanyId,
    /// Ordered references to status-history records.
    pub history: Vec<HistoryId>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        date_of_purchase: DateTime<Utc>,
        warranty_months: u32,
        owner: UserId,
        manufacturer: CompanyId,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            date_of_purchase,
            warranty_months,
            owner,
            manufacturer,
            history: Vec::new(),
            created_at,
        })
    }

    /// Link a status-history record to this product (append-only).
    pub fn attach_history(&mut self, history_id: HistoryId) {
        self.history.push(history_id);
    }
}
