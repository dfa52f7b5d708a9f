use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assettrack_core::{DomainError, LocationId, UserId};

/// A physical location where products live or move through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub address: Option<String>,
    pub created_by: UserId,
    pub edited_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Location {
    pub fn new(
        id: LocationId,
        name: impl Into<String>,
        address: Option<String>,
        created_by: UserId,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("location name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            address,
            created_by,
            edited_by: None,
            created_at,
        })
    }
}
