//! Infrastructure layer: key-value storage, snapshots, configuration.

pub mod config;
pub mod kv_store;
pub mod persisted_ledger;
pub mod snapshot;

pub use config::StoreConfig;
pub use kv_store::{DirectoryStore, InMemoryStore, KeyValueStore, StoreError};
pub use persisted_ledger::PersistedLedger;
pub use snapshot::{HISTORY_KEY, PRODUCTS_KEY, Snapshot};
