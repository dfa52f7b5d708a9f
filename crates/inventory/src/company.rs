use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assettrack_core::{CompanyId, DomainError, UserId};

/// Manufacturer/brand master record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub description: Option<String>,
    pub created_by: UserId,
    pub edited_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Company {
    pub fn new(
        id: CompanyId,
        name: impl Into<String>,
        description: Option<String>,
        created_by: UserId,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("company name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            description,
            created_by,
            edited_by: None,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_company_rejects_blank_name() {
        let err = Company::new(CompanyId::new(), "", None, UserId::new(), Utc::now()).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
