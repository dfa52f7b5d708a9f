//! `assettrack-analytics` — the analytics aggregation engine.
//!
//! Turns raw inventory records into four derived views: items expiring
//! within a warranty horizon, product usage per owner, the fleet-wide
//! warranty-status split, and the distribution of recorded lifecycle
//! statuses.
//!
//! The engine is a pure read path: it issues typed lookups against a
//! [`assettrack_infra::RecordStore`], never writes, and takes `now` as an
//! explicit parameter everywhere time matters (wall-clock is read only at
//! the HTTP boundary).

pub mod enrich;
pub mod expiry;
pub mod grouping;
pub mod horizon;
pub mod report;

pub use enrich::{EnrichedHistory, EnrichedProduct, EnrichedStatus, enrich};
pub use expiry::warranty_expiry;
pub use grouping::{ChartSeries, group_count};
pub use horizon::expiring_within;
pub use report::{Analytics, AnalyticsSummary};
