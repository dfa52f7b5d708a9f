use serde::{Deserialize, Serialize};

use assettrack_core::{HistoryId, LocationId};

/// One lifecycle status recorded for a product, tied to where it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Free-form lifecycle label, e.g. "in use", "retired".
    pub name: String,
    pub location: LocationId,
}

/// A status-change record attached to a product.
///
/// A history record may carry zero or more status entries; the
/// status-distribution report treats each entry as an independent
/// countable event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub id: HistoryId,
    pub status: Vec<StatusEntry>,
}

impl History {
    pub fn new(id: HistoryId, status: Vec<StatusEntry>) -> Self {
        Self { id, status }
    }
}
