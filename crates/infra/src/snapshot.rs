//! Ledger snapshot codec: two JSON documents, one per collection.
//!
//! Records are stored with camelCase field names and RFC 3339 timestamps.
//! Loading never fails: a missing or unreadable key yields `None` for that
//! collection and a warning in the log, and the other key is still used.

use serde::Serialize;
use serde::de::DeserializeOwned;

use stockroom_inventory::{MovementEvent, Product};

use crate::kv_store::{KeyValueStore, StoreError};

/// Storage key of the product collection.
pub const PRODUCTS_KEY: &str = "logistics-products";
/// Storage key of the movement history.
pub const HISTORY_KEY: &str = "logistics-history";

/// Collections read back from a store. `None` means "absent or unusable".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub products: Option<Vec<Product>>,
    pub history: Option<Vec<MovementEvent>>,
}

impl Snapshot {
    /// Read both keys, tolerating missing or malformed data.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self {
            products: load_key(store, PRODUCTS_KEY),
            history: load_key(store, HISTORY_KEY),
        }
    }
}

fn load_key<S, T>(store: &S, key: &str) -> Option<Vec<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to read stored snapshot; ignoring");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(records) => Some(records),
        Err(err) => {
            tracing::warn!(key, error = %err, "malformed stored snapshot; ignoring");
            None
        }
    }
}

fn save_key<S, T>(store: &S, key: &str, records: &[T]) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string(records).map_err(|source| StoreError::Serialization {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &json)
}

pub fn save_products<S: KeyValueStore + ?Sized>(
    store: &S,
    products: &[Product],
) -> Result<(), StoreError> {
    save_key(store, PRODUCTS_KEY, products)
}

pub fn save_history<S: KeyValueStore + ?Sized>(
    store: &S,
    history: &[MovementEvent],
) -> Result<(), StoreError> {
    save_key(store, HISTORY_KEY, history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv_store::InMemoryStore;
    use stockroom_inventory::{MovementType, StockStatus, seed_history, seed_products};

    #[test]
    fn saved_collections_load_back_equal() {
        let store = InMemoryStore::new();
        save_products(&store, &seed_products()).unwrap();
        save_history(&store, &seed_history()).unwrap();

        let snapshot = Snapshot::load(&store);
        assert_eq!(snapshot.products, Some(seed_products()));
        assert_eq!(snapshot.history, Some(seed_history()));
    }

    #[test]
    fn stored_format_uses_plain_records_and_iso_timestamps() {
        let store = InMemoryStore::new();
        save_history(&store, &seed_history()[..1]).unwrap();
        let raw = store.get(HISTORY_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["productId"], "A-001");
        assert_eq!(value[0]["type"], "inbound");
        assert_eq!(value[0]["date"], "2025-05-20T00:00:00Z");
        assert!(value[0].get("note").is_none());
    }

    #[test]
    fn parses_browser_style_records() {
        let store = InMemoryStore::new();
        store
            .set(
                PRODUCTS_KEY,
                r#"[{"id":"A-001","name":"Laptop","category":"electronics","location":"A-1-2",
                    "stockQuantity":5,"minStockLevel":10,"maxStockLevel":30,
                    "stockStatus":"low","createdAt":"2025-05-20T00:00:00.000Z"}]"#,
            )
            .unwrap();
        store
            .set(
                HISTORY_KEY,
                r#"[{"id":"H-9","productId":"A-001","productName":"Laptop","type":"outbound",
                    "quantity":2,"date":"2025-05-24T09:30:00.000Z","staff":"Park","note":"order"}]"#,
            )
            .unwrap();

        let snapshot = Snapshot::load(&store);
        let products = snapshot.products.unwrap();
        assert_eq!(products[0].stock_status, StockStatus::Low);
        assert_eq!(products[0].optimal_stock_level, None);
        let history = snapshot.history.unwrap();
        assert_eq!(history[0].movement_type, MovementType::Outbound);
        assert_eq!(history[0].note.as_deref(), Some("order"));
    }

    #[test]
    fn malformed_keys_are_ignored_independently() {
        let store = InMemoryStore::new();
        save_products(&store, &seed_products()).unwrap();
        store.set(HISTORY_KEY, "{not json").unwrap();

        let snapshot = Snapshot::load(&store);
        assert_eq!(snapshot.products, Some(seed_products()));
        assert_eq!(snapshot.history, None);

        store.set(PRODUCTS_KEY, r#"[{"id":"A-001","createdAt":"yesterday"}]"#).unwrap();
        assert_eq!(Snapshot::load(&store).products, None);
    }
}
