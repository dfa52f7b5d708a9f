//! Infrastructure layer: record persistence.

pub mod store;

pub use store::{InMemoryRecordStore, RecordStore, StoreError};

#[cfg(feature = "postgres")]
pub use store::postgres::PostgresRecordStore;
